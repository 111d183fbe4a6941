//! Print unit conversion.
//!
//! Templates are authored in millimeters. The vector backend works in
//! PostScript points and the raster backend in device pixels.

/// Points per millimeter.
pub const MM_TO_PT: f32 = 2.83465;

/// Millimeters per point.
pub const PT_TO_MM: f32 = 1.0 / MM_TO_PT;

/// Density assumed for on-screen previews.
pub const DEFAULT_SCREEN_DPI: f32 = 96.0;

const MM_PER_INCH: f32 = 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * PT_TO_MM
}

/// Converts millimeters to pixels at the given density (dots per inch).
pub fn mm_to_px(mm: f32, dpi: f32) -> f32 {
    mm * dpi / MM_PER_INCH
}
