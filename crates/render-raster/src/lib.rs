//! Raster PNG backend.
//!
//! Paints a resolved layout onto a `tiny-skia` pixmap at print density and
//! encodes it as PNG. Glyph outlines come from fonts discovered through
//! `fontdb`; when no font is available text is skipped with a warning.

mod canvas;
mod fonts;
mod options;
mod renderer;

pub use fonts::FontLibrary;
pub use options::{RasterOptions, is_valid_scale};
pub use renderer::RasterRenderer;
