//! Style records attached to template elements.

use crate::font::{FontStyle, FontWeight};
use crate::text::{TextAlign, VerticalAlign};
use serde::{Deserialize, Serialize};
use sheetpress_types::Color;

/// A partial style as authored on a template element.
///
/// Every field is optional; absent fields fall back to the defaults of
/// [`ResolvedStyle`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    /// Width in millimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    /// Multiple of the font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// A complete style where every property has a value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: Color,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub line_height: f32,
    pub opacity: f32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            color: Color::black(),
            fill: Color::transparent(),
            stroke: Color::transparent(),
            stroke_width: 0.0,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            line_height: 1.2,
            opacity: 1.0,
        }
    }
}

impl ResolvedStyle {
    /// Replaces every property that `style` sets.
    pub fn apply(&mut self, style: &ElementStyle) {
        if let Some(family) = &style.font_family {
            self.font_family = family.clone();
        }
        if let Some(size) = style.font_size {
            self.font_size = size;
        }
        if let Some(weight) = style.font_weight {
            self.font_weight = weight;
        }
        if let Some(font_style) = style.font_style {
            self.font_style = font_style;
        }
        if let Some(color) = &style.color {
            self.color = color.clone();
        }
        if let Some(fill) = &style.fill {
            self.fill = fill.clone();
        }
        if let Some(stroke) = &style.stroke {
            self.stroke = stroke.clone();
        }
        if let Some(width) = style.stroke_width {
            self.stroke_width = width;
        }
        if let Some(align) = style.align {
            self.align = align;
        }
        if let Some(valign) = style.vertical_align {
            self.vertical_align = valign;
        }
        if let Some(line_height) = style.line_height {
            self.line_height = line_height;
        }
        if let Some(opacity) = style.opacity {
            self.opacity = opacity;
        }
    }

    /// Opacity as painted, limited to `0..=1`.
    pub fn paint_opacity(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }

    pub fn has_fill(&self) -> bool {
        !self.fill.is_transparent()
    }

    pub fn has_stroke(&self) -> bool {
        !self.stroke.is_transparent()
    }
}
