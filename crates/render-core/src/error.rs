use sheetpress_resource::ResourceError;
use thiserror::Error;

/// Failures while painting a resolved layout. Missing or undecodable images
/// are not errors; backends draw a placeholder instead.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
    #[error("Rasterization failed: {0}")]
    Raster(String),
    #[error("Could not decode image: {0}")]
    Image(String),
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

impl From<::image::ImageError> for RenderError {
    fn from(err: ::image::ImageError) -> Self {
        RenderError::Image(err.to_string())
    }
}
