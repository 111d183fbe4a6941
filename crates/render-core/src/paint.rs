//! Paint rules shared by all backends.

use sheetpress_style::ResolvedStyle;
use sheetpress_template::ImageFit;
use sheetpress_types::{Color, PT_TO_MM, Rect};

/// Fill for images that could not be loaded.
pub const PLACEHOLDER_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);

/// Stroke width in millimeters. An unset (zero) width strokes at one point.
pub fn stroke_width_mm(style: &ResolvedStyle) -> f32 {
    if style.stroke_width > 0.0 {
        style.stroke_width
    } else {
        PT_TO_MM
    }
}

/// Lines use the stroke color, falling back to the text color when the
/// stroke is transparent.
pub fn line_color(style: &ResolvedStyle) -> &Color {
    if style.has_stroke() {
        &style.stroke
    } else {
        &style.color
    }
}

/// Where an image of `width` x `height` pixels is drawn inside `frame`.
///
/// For [`ImageFit::Cover`] the returned rect overflows the frame and the
/// caller clips to the frame.
pub fn fit_image(frame: Rect, width: u32, height: u32, fit: ImageFit) -> Rect {
    if width == 0 || height == 0 {
        return frame;
    }
    let sx = frame.width / width as f32;
    let sy = frame.height / height as f32;
    let scale = match fit {
        ImageFit::Fill => return frame,
        ImageFit::Contain => sx.min(sy),
        ImageFit::Cover => sx.max(sy),
    };
    let w = width as f32 * scale;
    let h = height as f32 * scale;
    Rect::new(
        frame.x + (frame.width - w) / 2.0,
        frame.y + (frame.height - h) / 2.0,
        w,
        h,
    )
}
