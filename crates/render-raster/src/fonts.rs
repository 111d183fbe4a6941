//! Font discovery and glyph metrics for the raster backend.

use fontdb::{Database, Family, ID, Query, Stretch, Style, Weight};
use log::debug;
use sheetpress_render_core::TextMeasure;
use sheetpress_style::{FontStyle, ResolvedStyle};
use sheetpress_types::PT_TO_MM;
use std::path::Path;
use ttf_parser::{Face, GlyphId};

/// Families tried, in order, when the requested one is not installed.
const FALLBACK_FAMILIES: [&str; 4] = ["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"];

/// The fonts available to the raster backend.
///
/// Starts empty. Load system fonts or font files explicitly.
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    db: Database,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_fonts(mut self) -> Self {
        self.db.load_system_fonts();
        debug!("Loaded {} system font face(s)", self.db.len());
        self
    }

    pub fn load_font_data(&mut self, data: Vec<u8>) {
        let before = self.db.len();
        self.db.load_font_data(data);
        debug!("Font data added {} face(s)", self.db.len() - before);
    }

    pub fn load_fonts_dir(&mut self, dir: &Path) {
        self.db.load_fonts_dir(dir);
        debug!("Font library has {} face(s) after scanning {}", self.db.len(), dir.display());
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Best face for `style`: the requested family, then the fallback
    /// families, then any face at all.
    pub fn query(&self, style: &ResolvedStyle) -> Option<ID> {
        let weight = Weight(style.font_weight.numeric_value());
        let font_style = match style.font_style {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
            FontStyle::Oblique => Style::Oblique,
        };
        let mut families = vec![Family::Name(&style.font_family)];
        families.extend(FALLBACK_FAMILIES.iter().map(|name| Family::Name(name)));
        families.push(Family::SansSerif);

        self.db
            .query(&Query {
                families: &families,
                weight,
                stretch: Stretch::Normal,
                style: font_style,
            })
            .or_else(|| self.db.faces().next().map(|face| face.id))
    }

    /// Runs `f` with the parsed face `id`.
    pub fn with_face<T>(&self, id: ID, f: impl FnOnce(&Face<'_>) -> T) -> Option<T> {
        self.db
            .with_face_data(id, |data, index| Face::parse(data, index).ok().map(|face| f(&face)))
            .flatten()
    }
}

/// [`TextMeasure`] over a parsed font face.
pub(crate) struct GlyphMetrics<'a, 'f> {
    pub face: &'a Face<'f>,
}

impl GlyphMetrics<'_, '_> {
    pub fn units_per_em(&self) -> f32 {
        self.face.units_per_em() as f32
    }

    pub fn glyph(&self, c: char) -> GlyphId {
        self.face.glyph_index(c).unwrap_or(GlyphId(0))
    }

    /// Advance of `glyph` in font units.
    pub fn advance(&self, glyph: GlyphId) -> f32 {
        self.face.glyph_hor_advance(glyph).unwrap_or(0) as f32
    }
}

impl TextMeasure for GlyphMetrics<'_, '_> {
    fn text_width(&self, text: &str, style: &ResolvedStyle) -> f32 {
        let units: f32 = text.chars().map(|c| self.advance(self.glyph(c))).sum();
        units / self.units_per_em() * style.font_size * PT_TO_MM
    }

    fn ascent(&self, _style: &ResolvedStyle) -> f32 {
        self.face.ascender() as f32 / self.units_per_em()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_library_finds_nothing() {
        let fonts = FontLibrary::new();
        assert!(fonts.is_empty());
        assert!(fonts.query(&ResolvedStyle::default()).is_none());
    }

    #[test]
    fn test_garbage_font_data_adds_no_faces() {
        let mut fonts = FontLibrary::new();
        fonts.load_font_data(b"not a font".to_vec());
        assert_eq!(fonts.len(), 0);
    }

    #[test]
    fn test_system_font_metrics_are_sane() {
        let fonts = FontLibrary::new().with_system_fonts();
        let style = ResolvedStyle::default();
        let Some(id) = fonts.query(&style) else {
            // Nothing installed on this machine.
            return;
        };
        let (wide, narrow, ascent) = fonts
            .with_face(id, |face| {
                let metrics = GlyphMetrics { face };
                (
                    metrics.text_width("WWW", &style),
                    metrics.text_width("iii", &style),
                    metrics.ascent(&style),
                )
            })
            .unwrap();
        assert!(wide > narrow);
        assert!(ascent > 0.5 && ascent < 1.2);
    }
}
