use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid actor data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read actor data '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Actor data must be an object or an array of objects, got {0}")]
    UnexpectedShape(&'static str),
}
