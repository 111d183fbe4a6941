//! Binds a template tree to entity data.
//!
//! Resolution is plain structural recursion: leaves become one resolved
//! primitive each, groups translate their subtree, repeats instantiate their
//! template once per bound item. Everything is appended to one output vector
//! in depth-first order, which is also paint order.

use crate::ast::{Direction, ElementKind, RenderElement, TemplateDefinition};
use crate::layout::{ResolvedElement, ResolvedKind, ResolvedLayout};
use log::trace;
use serde_json::Value;
use sheetpress_jpath::{Scope, evaluate_condition, interpolate, resolve_binding};
use sheetpress_style::{NamedStyles, merge_styles};

/// Resolves `template` against `data` into a flat, absolute layout.
///
/// Never fails: bindings that do not resolve contribute empty text or no
/// elements at all.
pub fn resolve(template: &TemplateDefinition, data: &Value) -> ResolvedLayout {
    let resolver = Resolver {
        styles: &template.styles,
    };
    let scope = Scope::new(data);
    let mut elements = Vec::new();
    for element in &template.layout {
        resolver.resolve_element(element, &scope, &mut elements);
    }

    ResolvedLayout {
        width: template.meta.width,
        height: template.meta.height,
        elements,
    }
}

struct Resolver<'t> {
    styles: &'t NamedStyles,
}

impl Resolver<'_> {
    fn resolve_element(&self, el: &RenderElement, scope: &Scope<'_>, out: &mut Vec<ResolvedElement>) {
        if !evaluate_condition(el.condition.as_deref(), scope) {
            return;
        }

        let kind = match &el.kind {
            ElementKind::Text { content, max_lines } => ResolvedKind::Text {
                content: interpolate(content, scope),
                max_lines: *max_lines,
            },
            ElementKind::Image { src, fit, radius } => ResolvedKind::Image {
                src: interpolate(src, scope),
                fit: *fit,
                radius: *radius,
            },
            ElementKind::Rect { radius } => ResolvedKind::Rect { radius: *radius },
            ElementKind::Line { x2, y2 } => ResolvedKind::Line { x2: *x2, y2: *y2 },
            ElementKind::Group { elements } => {
                let start = out.len();
                for child in elements {
                    self.resolve_element(child, scope, out);
                }
                translate_from(out, start, el.x, el.y);
                return;
            }
            ElementKind::Repeat {
                bind,
                direction,
                gap,
                max_items,
                template,
            } => {
                self.resolve_repeat(el, bind, *direction, *gap, *max_items, template, scope, out);
                return;
            }
            ElementKind::Unknown => {
                trace!("Skipping element of unknown type at ({}, {})", el.x, el.y);
                return;
            }
        };

        out.push(ResolvedElement {
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
            style: merge_styles(el.style.as_ref(), self.styles),
            kind,
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_repeat(
        &self,
        el: &RenderElement,
        bind: &str,
        direction: Direction,
        gap: f32,
        max_items: Option<usize>,
        template: &[RenderElement],
        scope: &Scope<'_>,
        out: &mut Vec<ResolvedElement>,
    ) {
        let Some(items) = resolve_binding(bind, scope).as_array() else {
            trace!("Repeat binding '{}' is not a list", bind);
            return;
        };

        // The first template element sets the pitch, whether or not it is shown.
        let step = template
            .first()
            .and_then(|first| match direction {
                Direction::Horizontal => first.width,
                Direction::Vertical => first.height,
            })
            .unwrap_or(0.0)
            + gap;

        let count = max_items.map_or(items.len(), |max| max.min(items.len()));
        let mut offset = 0.0;
        for (index, item) in items.iter().take(count).enumerate() {
            let item_scope = scope.with_item(item, index);
            let start = out.len();
            for child in template {
                self.resolve_element(child, &item_scope, out);
            }
            match direction {
                Direction::Horizontal => translate_from(out, start, el.x + offset, el.y),
                Direction::Vertical => translate_from(out, start, el.x, el.y + offset),
            }
            offset += step;
        }
    }
}

fn translate_from(out: &mut [ResolvedElement], start: usize, dx: f32, dy: f32) {
    for resolved in &mut out[start..] {
        resolved.translate(dx, dy);
    }
}
