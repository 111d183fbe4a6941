use crate::encoding::to_win_ansi;
use crate::metrics::HelveticaMetrics;
use crate::xobject::embed_image;
use log::{debug, warn};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, dictionary};
use sheetpress_render_core::{
    PLACEHOLDER_COLOR, RenderError, TextFrame, fit_image, flip_y, layout_text, line_color, load_image,
    stroke_width_mm,
};
use sheetpress_resource::ResourceProvider;
use sheetpress_style::ResolvedStyle;
use sheetpress_template::{ImageFit, ResolvedElement, ResolvedKind};
use sheetpress_types::{Color, Rect, mm_to_pt};
use std::collections::HashMap;

/// Control point distance for approximating a quarter circle with a cubic bezier.
const KAPPA: f32 = 0.552_284_8;

/// Font resource names. Declared once per document by the renderer.
pub(crate) const FONTS: [(&str, &str); 4] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Helvetica-BoldOblique"),
];

fn font_resource(style: &ResolvedStyle) -> &'static str {
    match (style.font_weight.is_bold(), style.font_style.is_slanted()) {
        (false, false) => FONTS[0].0,
        (true, false) => FONTS[1].0,
        (false, true) => FONTS[2].0,
        (true, true) => FONTS[3].0,
    }
}

fn rgb_operands(color: &Color) -> Vec<Object> {
    let (r, g, b) = color.to_unit_rgb();
    vec![r.into(), g.into(), b.into()]
}

/// Graphics state already emitted to the content stream.
#[derive(Debug, Default, Clone)]
struct PageRenderState {
    font: Option<(&'static str, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// XObjects and ExtGStates referenced by the page content.
#[derive(Debug, Default)]
pub(crate) struct PageResources {
    pub xobjects: Dictionary,
    pub ext_g_states: Dictionary,
    images_by_src: HashMap<String, (String, u32, u32)>,
    alpha_states: HashMap<(u16, u16), String>,
}

/// Draws resolved elements into a single page content stream.
///
/// Layout coordinates are millimeters from the top-left corner; the
/// content stream uses points from the bottom-left corner.
pub(crate) struct PageContext<'a> {
    doc: &'a mut Document,
    resources: &'a dyn ResourceProvider,
    page_height: f32,
    content: Content,
    state: PageRenderState,
    page_resources: PageResources,
}

impl<'a> PageContext<'a> {
    pub fn new(doc: &'a mut Document, resources: &'a dyn ResourceProvider, page_height: f32) -> Self {
        Self {
            doc,
            resources,
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            page_resources: PageResources::default(),
        }
    }

    pub fn finish(self) -> (Content, PageResources) {
        (self.content, self.page_resources)
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn x(&self, x: f32) -> f32 {
        mm_to_pt(x)
    }

    fn y(&self, y: f32) -> f32 {
        mm_to_pt(flip_y(y, self.page_height))
    }

    pub fn draw_element(&mut self, el: &ResolvedElement) {
        match &el.kind {
            ResolvedKind::Text { content, max_lines } => self.draw_text(el, content, *max_lines),
            ResolvedKind::Rect { radius } => self.draw_rect(el, radius.unwrap_or(0.0)),
            ResolvedKind::Line { x2, y2 } => self.draw_line(el, *x2, *y2),
            ResolvedKind::Image { src, fit, radius } => {
                self.draw_image(el, src, *fit, radius.unwrap_or(0.0))
            }
        }
    }

    /// Runs `draw` under an ExtGState carrying the given alphas, if either
    /// is below one.
    fn with_alpha<T>(&mut self, fill_alpha: f32, stroke_alpha: f32, draw: impl FnOnce(&mut Self) -> T) -> T {
        if fill_alpha >= 1.0 && stroke_alpha >= 1.0 {
            return draw(self);
        }
        let name = self.alpha_state(fill_alpha, stroke_alpha);
        let saved = self.state.clone();
        self.op("q", vec![]);
        self.op("gs", vec![Object::Name(name.into_bytes())]);
        let result = draw(self);
        self.op("Q", vec![]);
        self.state = saved;
        result
    }

    fn alpha_state(&mut self, fill_alpha: f32, stroke_alpha: f32) -> String {
        let quantize = |a: f32| (a.clamp(0.0, 1.0) * 1000.0).round() as u16;
        let key = (quantize(fill_alpha), quantize(stroke_alpha));
        if let Some(name) = self.page_resources.alpha_states.get(&key) {
            return name.clone();
        }
        let name = format!("GS{}", self.page_resources.alpha_states.len() + 1);
        let state = dictionary! {
            "Type" => "ExtGState",
            "ca" => key.0 as f32 / 1000.0,
            "CA" => key.1 as f32 / 1000.0,
        };
        self.page_resources
            .ext_g_states
            .set(name.as_bytes(), Object::Dictionary(state));
        self.page_resources.alpha_states.insert(key, name.clone());
        name
    }

    fn set_font(&mut self, style: &ResolvedStyle) {
        let font = (font_resource(style), style.font_size);
        if self.state.font != Some(font) {
            self.op("Tf", vec![Object::Name(font.0.as_bytes().to_vec()), font.1.into()]);
            self.state.font = Some(font);
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.op("rg", rgb_operands(color));
            self.state.fill_color = Some(color.clone());
        }
    }

    fn set_stroke_color(&mut self, color: &Color) {
        if self.state.stroke_color.as_ref() != Some(color) {
            self.op("RG", rgb_operands(color));
            self.state.stroke_color = Some(color.clone());
        }
    }

    fn set_line_width(&mut self, width_mm: f32) {
        let width = mm_to_pt(width_mm);
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    /// Appends a closed rectangle path, with rounded corners when `radius` is positive.
    fn rect_path(&mut self, rect: Rect, radius: f32) {
        let r = mm_to_pt(rect.clamp_radius(radius));
        let x = self.x(rect.x);
        let y = self.y(rect.bottom());
        let w = mm_to_pt(rect.width);
        let h = mm_to_pt(rect.height);
        if r <= 0.0 {
            self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
            return;
        }
        let k = r * KAPPA;
        let (right, top) = (x + w, y + h);
        self.op("m", vec![(x + r).into(), y.into()]);
        self.op("l", vec![(right - r).into(), y.into()]);
        self.curve(right - r + k, y, right, y + r - k, right, y + r);
        self.op("l", vec![right.into(), (top - r).into()]);
        self.curve(right, top - r + k, right - r + k, top, right - r, top);
        self.op("l", vec![(x + r).into(), top.into()]);
        self.curve(x + r - k, top, x, top - r + k, x, top - r);
        self.op("l", vec![x.into(), (y + r).into()]);
        self.curve(x, y + r - k, x + r - k, y, x + r, y);
        self.op("h", vec![]);
    }

    fn curve(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.op(
            "c",
            vec![x1.into(), y1.into(), x2.into(), y2.into(), x3.into(), y3.into()],
        );
    }

    fn draw_rect(&mut self, el: &ResolvedElement, radius: f32) {
        let Some(bounds) = el.bounds() else {
            debug!("Skipping rect at ({}, {}) without a size", el.x, el.y);
            return;
        };
        self.paint_rect(bounds, radius, &el.style, Some(&el.style.fill));
    }

    /// Fills and strokes `bounds` per `style`, using `fill` instead of the
    /// style's fill color.
    fn paint_rect(&mut self, bounds: Rect, radius: f32, style: &ResolvedStyle, fill: Option<&Color>) {
        let fill = fill.filter(|c| !c.is_transparent());
        let stroke = style.has_stroke();
        let operator = match (fill.is_some(), stroke) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => return,
        };
        let fill_alpha = style.paint_opacity() * fill.map_or(1.0, |c| c.a);
        let stroke_alpha = style.paint_opacity() * if stroke { style.stroke.a } else { 1.0 };
        self.with_alpha(fill_alpha, stroke_alpha, |page| {
            if let Some(fill) = fill {
                page.set_fill_color(fill);
            }
            if stroke {
                page.set_stroke_color(&style.stroke);
                page.set_line_width(stroke_width_mm(style));
            }
            page.rect_path(bounds, radius);
            page.op(operator, vec![]);
        });
    }

    fn draw_line(&mut self, el: &ResolvedElement, x2: f32, y2: f32) {
        let style = &el.style;
        let color = line_color(style);
        if color.is_transparent() {
            return;
        }
        self.with_alpha(1.0, style.paint_opacity() * color.a, |page| {
            page.set_stroke_color(color);
            page.set_line_width(stroke_width_mm(style));
            let (ax, ay) = (page.x(el.x), page.y(el.y));
            let (bx, by) = (page.x(x2), page.y(y2));
            page.op("m", vec![ax.into(), ay.into()]);
            page.op("l", vec![bx.into(), by.into()]);
            page.op("S", vec![]);
        });
    }

    fn draw_text(&mut self, el: &ResolvedElement, content: &str, max_lines: Option<usize>) {
        let style = &el.style;
        if style.color.is_transparent() {
            return;
        }
        let frame = TextFrame {
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
        };
        let lines = layout_text(content, frame, style, max_lines, &HelveticaMetrics);
        if lines.is_empty() {
            return;
        }
        self.with_alpha(style.paint_opacity() * style.color.a, 1.0, |page| {
            page.op("BT", vec![]);
            page.set_font(style);
            page.set_fill_color(&style.color);
            for line in &lines {
                let (x, y) = (page.x(line.x), page.y(line.baseline));
                page.op("Tm", vec![1.into(), 0.into(), 0.into(), 1.into(), x.into(), y.into()]);
                page.op(
                    "Tj",
                    vec![Object::String(to_win_ansi(line.text), StringFormat::Literal)],
                );
            }
            page.op("ET", vec![]);
        });
    }

    fn draw_image(&mut self, el: &ResolvedElement, src: &str, fit: ImageFit, radius: f32) {
        let Some(frame) = el.bounds() else {
            warn!("Skipping image '{}' without a size", src);
            return;
        };

        let (name, width, height) = match self.image_resource(src) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Drawing placeholder for image '{}': {}", src, e);
                self.paint_rect(frame, radius, &el.style, Some(&PLACEHOLDER_COLOR));
                return;
            }
        };

        let target = fit_image(frame, width, height, fit);
        let clip = radius > 0.0 || fit == ImageFit::Cover;
        let opacity = el.style.paint_opacity();
        self.with_alpha(opacity, opacity, |page| {
            let saved = page.state.clone();
            page.op("q", vec![]);
            if clip {
                page.rect_path(frame, radius);
                page.op("W", vec![]);
                page.op("n", vec![]);
            }
            let (x, y) = (page.x(target.x), page.y(target.bottom()));
            let (w, h) = (mm_to_pt(target.width), mm_to_pt(target.height));
            page.op("cm", vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()]);
            page.op("Do", vec![Object::Name(name.into_bytes())]);
            page.op("Q", vec![]);
            page.state = saved;
        });
    }

    /// Returns the XObject name for `src`, embedding the image on first use.
    fn image_resource(&mut self, src: &str) -> Result<(String, u32, u32), RenderError> {
        if let Some(entry) = self.page_resources.images_by_src.get(src) {
            return Ok(entry.clone());
        }
        let image = load_image(src, self.resources)?;
        let id = embed_image(self.doc, &image)?;
        let name = format!("Im{}", self.page_resources.images_by_src.len() + 1);
        self.page_resources
            .xobjects
            .set(name.as_bytes(), Object::Reference(id));
        let entry = (name, image.width(), image.height());
        self.page_resources
            .images_by_src
            .insert(src.to_string(), entry.clone());
        Ok(entry)
    }
}
