//! Core rendering abstractions shared by the sheet backends.
//!
//! This crate provides:
//! - the [`DocumentRenderer`] trait every backend implements
//! - [`RenderError`]
//! - the geometry rules both backends must agree on (text line placement,
//!   stroke defaults, image fitting) so a sheet paints the same in PDF and PNG
//! - image loading and decoding through a resource provider

mod error;
pub mod images;
pub mod paint;
pub mod text;
mod traits;

pub use error::RenderError;
pub use images::{DecodedImage, load_image};
pub use paint::{PLACEHOLDER_COLOR, fit_image, line_color, stroke_width_mm};
pub use text::{TextFrame, TextLine, TextMeasure, layout_text};
pub use traits::DocumentRenderer;

/// Convert a top-left-origin Y coordinate to a bottom-left-origin one.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
