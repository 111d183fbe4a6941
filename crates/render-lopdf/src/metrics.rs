//! Advance widths of the standard 14 Helvetica faces.

use crate::encoding::{REPLACEMENT, win_ansi_byte};
use sheetpress_render_core::TextMeasure;
use sheetpress_style::ResolvedStyle;
use sheetpress_types::PT_TO_MM;

/// Widths in 1/1000 em for the printable ASCII range, starting at space.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Widths for WinAnsi codes 0x80..=0xFF. Zero marks unassigned codes.
#[rustfmt::skip]
const HELVETICA_HIGH: [u16; 128] = [
    556,    0,  222,  556,  333, 1000,  556,  556,  333, 1000,  667,  333, 1000,    0,  611,    0,
      0,  222,  222,  333,  333,  350,  556, 1000,  333, 1000,  500,  333,  944,    0,  500,  667,
    278,  333,  556,  556,  556,  556,  260,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    400,  584,  333,  333,  333,  556,  537,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    667,  667,  667,  667,  667,  667, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    556,  556,  556,  556,  556,  556,  889,  500,  556,  556,  556,  556,  278,  278,  278,  278,
    556,  556,  556,  556,  556,  556,  556,  584,  611,  556,  556,  556,  556,  500,  556,  500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH: [u16; 128] = [
    556,    0,  278,  556,  500, 1000,  556,  556,  333, 1000,  667,  333, 1000,    0,  611,    0,
      0,  278,  278,  500,  500,  350,  556, 1000,  333, 1000,  556,  333,  944,    0,  500,  667,
    278,  333,  556,  556,  556,  556,  280,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    400,  584,  333,  333,  333,  611,  556,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    722,  722,  722,  722,  722,  722, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    556,  556,  556,  556,  556,  556,  889,  556,  556,  556,  556,  556,  278,  278,  278,  278,
    611,  611,  611,  611,  611,  611,  611,  584,  611,  611,  611,  611,  611,  556,  611,  556,
];

/// Used if a code has no width entry.
const DEFAULT_WIDTH: u16 = 556;

const ASCENDER: f32 = 0.718;

/// Text metrics for the built-in PDF fonts. Oblique faces share the widths
/// of their upright counterparts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    /// Width of the glyph `c` is drawn with. Characters the encoding
    /// cannot represent are measured as the `?` that replaces them.
    fn char_width(c: char, bold: bool) -> u16 {
        let code = win_ansi_byte(c).unwrap_or(REPLACEMENT) as usize;
        let (ascii, high) = if bold {
            (&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH)
        } else {
            (&HELVETICA, &HELVETICA_HIGH)
        };
        let width = match code {
            0x20..=0x7E => ascii[code - 0x20],
            0x80..=0xFF => high[code - 0x80],
            _ => 0,
        };
        if width == 0 { DEFAULT_WIDTH } else { width }
    }
}

impl TextMeasure for HelveticaMetrics {
    fn text_width(&self, text: &str, style: &ResolvedStyle) -> f32 {
        let bold = style.font_weight.is_bold();
        let units: u32 = text.chars().map(|c| Self::char_width(c, bold) as u32).sum();
        units as f32 / 1000.0 * style.font_size * PT_TO_MM
    }

    fn ascent(&self, _style: &ResolvedStyle) -> f32 {
        ASCENDER
    }
}
