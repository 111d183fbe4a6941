use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid template '{id}': {message}")]
    Invalid { id: String, message: String },

    #[error("Failed to read template '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown export format '{0}', expected 'pdf' or 'png'")]
    UnknownFormat(String),
}
