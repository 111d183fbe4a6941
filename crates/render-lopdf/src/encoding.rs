//! Text encoding for the base-14 fonts, which are declared with
//! `/WinAnsiEncoding` (Windows code page 1252).

/// Unicode characters placed in the 0x80..=0x9F block, indexed from 0x80.
/// `None` marks the five unassigned slots.
#[rustfmt::skip]
const HIGH_BLOCK: [Option<char>; 32] = [
    Some('\u{20AC}'), None,             Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017D}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None,             Some('\u{017E}'), Some('\u{0178}'),
];

/// Byte emitted for characters the encoding cannot represent.
pub(crate) const REPLACEMENT: u8 = b'?';

/// The WinAnsi code for `c`, if it has one.
///
/// Printable ASCII and Latin-1 (U+00A0..=U+00FF) map to themselves. The
/// C1 control range U+0080..=U+009F does not: those bytes are typographic
/// characters in this encoding.
pub(crate) fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => HIGH_BLOCK
            .iter()
            .position(|&slot| slot == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes `s` for a `Tj` operand.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT)).collect()
}
