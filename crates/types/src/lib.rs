pub mod color;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use units::{DEFAULT_SCREEN_DPI, MM_TO_PT, PT_TO_MM, mm_to_pt, mm_to_px, pt_to_mm};
