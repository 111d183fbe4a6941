use sheetpress_render_core::RenderError;
use sheetpress_resource::ResourceError;
use sheetpress_source::SourceError;
use sheetpress_template::{ExportFormat, TemplateError};
use thiserror::Error;

/// Errors surfaced by the export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Actor data error: {0}")]
    Source(#[from] SourceError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Format {format} not supported by template {template}")]
    UnsupportedFormat { format: ExportFormat, template: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export cancelled")]
    Cancelled,
}
