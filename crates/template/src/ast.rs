//! The authored template model.

use crate::error::TemplateError;
use crate::format::ExportFormat;
use serde::{Deserialize, Serialize};
use sheetpress_style::{ElementStyle, NamedStyles};

/// A complete sheet template. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub meta: TemplateMeta,
    #[serde(default, skip_serializing_if = "NamedStyles::is_empty")]
    pub styles: NamedStyles,
    pub layout: Vec<RenderElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMeta {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page width in millimeters.
    pub width: f32,
    /// Page height in millimeters.
    pub height: f32,
    #[serde(default)]
    pub exports: Vec<ExportFormat>,
    /// Print-service product reference. Carried, not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printful: Option<String>,
}

impl TemplateMeta {
    pub fn supports(&self, format: ExportFormat) -> bool {
        self.exports.contains(&format)
    }
}

/// One node of the layout tree. Positions are millimeters relative to the
/// parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderElement {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    #[serde(rename_all = "camelCase")]
    Text {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_lines: Option<usize>,
    },
    Image {
        src: String,
        #[serde(default)]
        fit: ImageFit,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f32>,
    },
    Rect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f32>,
    },
    Line {
        x2: f32,
        y2: f32,
    },
    Group {
        #[serde(default)]
        elements: Vec<RenderElement>,
    },
    #[serde(rename_all = "camelCase")]
    Repeat {
        bind: String,
        #[serde(default)]
        direction: Direction,
        #[serde(default)]
        gap: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
        #[serde(default)]
        template: Vec<RenderElement>,
    },
    /// Any `type` this version does not know. Resolves to nothing.
    #[serde(other)]
    Unknown,
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Image { .. } => "image",
            ElementKind::Rect { .. } => "rect",
            ElementKind::Line { .. } => "line",
            ElementKind::Group { .. } => "group",
            ElementKind::Repeat { .. } => "repeat",
            ElementKind::Unknown => "unknown",
        }
    }
}

/// Flow direction of repeat instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// How an image is fitted into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    /// Stretch to the box.
    #[default]
    Fill,
    /// Scale to fit inside the box, preserving aspect ratio.
    Contain,
    /// Scale to cover the box, preserving aspect ratio; overflow is clipped.
    Cover,
}

impl TemplateDefinition {
    /// Parses and validates a template from its JSON source.
    pub fn from_json(source: &str) -> Result<Self, TemplateError> {
        let template: TemplateDefinition = serde_json::from_str(source)?;
        template.validate()?;
        Ok(template)
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    fn validate(&self) -> Result<(), TemplateError> {
        let invalid = |message: &str| TemplateError::Invalid {
            id: self.meta.id.clone(),
            message: message.to_string(),
        };
        if self.meta.id.trim().is_empty() {
            return Err(invalid("meta.id must not be empty"));
        }
        if !(self.meta.width > 0.0 && self.meta.height > 0.0) {
            return Err(invalid("page width and height must be positive"));
        }
        Ok(())
    }
}
