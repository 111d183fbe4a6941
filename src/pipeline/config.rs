use serde::{Deserialize, Serialize};
use sheetpress_template::ExportFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use sheetpress_render_raster::RasterOptions;

/// What to export: a template, an output format and optional overrides.
///
/// Deserializes from the request body the game-server module sends, e.g.
/// `{ "templateId": "character-card", "format": "png", "pixelRatio": 1 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub template_id: String,
    pub format: ExportFormat,
    /// Replaces the generated artifact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Raster supersampling factor. Ignored for PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f32>,
}

impl ExportRequest {
    pub fn new(template_id: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            template_id: template_id.into(),
            format,
            filename: None,
            pixel_ratio: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = Some(pixel_ratio);
        self
    }
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` under its filename.
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// `<actor>_<template>.<ext>`, with the actor name lowercased and every run
/// of other characters collapsed to `_`.
pub fn artifact_filename(actor_name: &str, template_id: &str, format: ExportFormat) -> String {
    let safe_name = slug::slugify(actor_name).replace('-', "_");
    let safe_name = if safe_name.is_empty() { "actor" } else { safe_name.as_str() };
    format!("{}_{}.{}", safe_name, template_id, format.extension())
}

/// Filenames already handed out within one batch.
///
/// Two actors that slug to the same name would otherwise overwrite each
/// other on disk. A repeated name gets the actor id inserted before its
/// extension, then a counter if that still collides.
#[derive(Debug, Default)]
pub struct BatchFilenames {
    taken: HashSet<String>,
}

impl BatchFilenames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a name for `actor_id`'s artifact that no earlier call returned.
    pub fn claim(&mut self, filename: &str, actor_id: &str) -> String {
        if self.taken.insert(filename.to_string()) {
            return filename.to_string();
        }
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (filename, None),
        };
        let id = slug::slugify(actor_id).replace('-', "_");
        let base = if id.is_empty() { stem.to_string() } else { format!("{}_{}", stem, id) };
        let candidate = |n: usize| {
            let stem = if n == 0 { base.clone() } else { format!("{}_{}", base, n + 1) };
            match ext {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem,
            }
        };
        let mut n = if id.is_empty() { 1 } else { 0 };
        loop {
            let name = candidate(n);
            if self.taken.insert(name.clone()) {
                return name;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_filename() {
        assert_eq!(
            artifact_filename("Rin", "character-card", ExportFormat::Pdf),
            "rin_character-card.pdf"
        );
        assert_eq!(
            artifact_filename("Sir Kai of the Vale!", "character-sheet", ExportFormat::Png),
            "sir_kai_of_the_vale_character-sheet.png"
        );
    }

    #[test]
    fn test_artifact_filename_without_usable_name() {
        assert_eq!(artifact_filename("???", "card", ExportFormat::Pdf), "actor_card.pdf");
    }

    #[test]
    fn test_batch_filenames_disambiguate_by_actor_id() {
        let mut names = BatchFilenames::new();
        assert_eq!(names.claim("goblin_character-card.png", "a1"), "goblin_character-card.png");
        assert_eq!(names.claim("goblin_character-card.png", "a2"), "goblin_character-card_a2.png");
        assert_eq!(names.claim("rin_character-card.png", "a3"), "rin_character-card.png");
    }

    #[test]
    fn test_batch_filenames_fall_back_to_counter() {
        let mut names = BatchFilenames::new();
        assert_eq!(names.claim("card.pdf", "x"), "card.pdf");
        assert_eq!(names.claim("card.pdf", "x"), "card_x.pdf");
        assert_eq!(names.claim("card.pdf", "x"), "card_x_2.pdf");
        assert_eq!(names.claim("card.pdf", "???"), "card_2.pdf");
        assert_eq!(names.claim("README", "Actor.7"), "README_actor_7");
    }

    #[test]
    fn test_request_builder() {
        let request = ExportRequest::new("card", ExportFormat::Png)
            .with_filename("out.png")
            .with_pixel_ratio(1.0);
        assert_eq!(request.filename.as_deref(), Some("out.png"));
        assert_eq!(request.pixel_ratio, Some(1.0));
    }

    #[test]
    fn test_request_from_json() {
        let request: ExportRequest =
            serde_json::from_str(r#"{ "templateId": "character-card", "format": "png", "pixelRatio": 1 }"#).unwrap();
        assert_eq!(request, ExportRequest::new("character-card", ExportFormat::Png).with_pixel_ratio(1.0));
        assert!(serde_json::from_str::<ExportRequest>(r#"{ "templateId": "x", "format": "svg" }"#).is_err());
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact {
            bytes: b"%PDF".to_vec(),
            filename: "rin_card.pdf".to_string(),
            mime_type: "application/pdf",
        };
        let path = artifact.write_to_dir(dir.path()).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF");
    }
}
