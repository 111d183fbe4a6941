//! Text block placement.
//!
//! Text is never wrapped: each `\n`-separated line is placed as-is. Both
//! backends take the line origins computed here and only differ in how they
//! draw glyphs.

use sheetpress_style::ResolvedStyle;
use sheetpress_types::PT_TO_MM;

/// Font metrics a backend can provide for its active font.
pub trait TextMeasure {
    /// Advance width of `text` in millimeters at the style's font size.
    fn text_width(&self, text: &str, style: &ResolvedStyle) -> f32;

    /// Distance from the top of the em box to the baseline, as a fraction
    /// of the font size.
    fn ascent(&self, style: &ResolvedStyle) -> f32;
}

/// The box a text element is laid out in (millimeters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFrame {
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// One positioned line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine<'a> {
    pub text: &'a str,
    /// Left edge of the line.
    pub x: f32,
    /// Baseline position, measured from the top of the page.
    pub baseline: f32,
    pub width: f32,
}

/// Places the lines of `content` inside `frame`.
///
/// Each line box is `font size * line height` tall with the glyphs centered
/// in it. The block is aligned vertically when the frame has a height, and
/// each line horizontally when it has a width. At most `max_lines` lines are
/// kept.
pub fn layout_text<'a>(
    content: &'a str,
    frame: TextFrame,
    style: &ResolvedStyle,
    max_lines: Option<usize>,
    measure: &dyn TextMeasure,
) -> Vec<TextLine<'a>> {
    let font_mm = style.font_size * PT_TO_MM;
    let line_height = font_mm * style.line_height;
    let half_leading = (line_height - font_mm) / 2.0;
    let ascent = measure.ascent(style) * font_mm;

    let lines: Vec<&str> = content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .take(max_lines.unwrap_or(usize::MAX))
        .collect();
    if lines.iter().all(|l| l.is_empty()) {
        return Vec::new();
    }

    let block_height = line_height * lines.len() as f32;
    let top = frame.y
        + frame
            .height
            .map_or(0.0, |h| style.vertical_align.offset(h, block_height));

    lines
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(i, text)| {
            let width = measure.text_width(text, style);
            let x = frame.x + frame.width.map_or(0.0, |w| style.align.offset(w, width));
            TextLine {
                text,
                x,
                baseline: top + i as f32 * line_height + half_leading + ascent,
                width,
            }
        })
        .collect()
}
