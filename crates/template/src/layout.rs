//! The renderer-facing output of template resolution.

use crate::ast::ImageFit;
use serde::Serialize;
use sheetpress_style::ResolvedStyle;
use sheetpress_types::{Rect, Size};

/// A fully resolved page: its physical size and the primitives to paint, in
/// paint order. Coordinates are millimeters from the page's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLayout {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<ResolvedElement>,
}

impl ResolvedLayout {
    pub fn page_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedElement {
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub style: ResolvedStyle,
    #[serde(flatten)]
    pub kind: ResolvedKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedKind {
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_lines: Option<usize>,
    },
    Image {
        src: String,
        fit: ImageFit,
        #[serde(skip_serializing_if = "Option::is_none")]
        radius: Option<f32>,
    },
    Rect {
        #[serde(skip_serializing_if = "Option::is_none")]
        radius: Option<f32>,
    },
    /// Absolute second endpoint.
    Line { x2: f32, y2: f32 },
}

impl ResolvedElement {
    /// Moves the element, line endpoint included, by `dx`, `dy`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        if let ResolvedKind::Line { x2, y2 } = &mut self.kind {
            *x2 += dx;
            *y2 += dy;
        }
    }

    /// The element's box, when it declares both dimensions.
    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.x, self.y, self.width?, self.height?))
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ResolvedKind::Text { .. } => "text",
            ResolvedKind::Image { .. } => "image",
            ResolvedKind::Rect { .. } => "rect",
            ResolvedKind::Line { .. } => "line",
        }
    }
}
