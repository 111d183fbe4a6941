mod common;

use common::fixtures::{party, pdf_only_template, rin, roster_template};
use common::pdf_assertions::{assert_contains_text, assert_lacks_text, font_names, media_box, page_operators};
use common::{TestResult, export_pdf, exporter_with_templates};
use sheetpress::resource::InMemoryResourceProvider;
use sheetpress::source::{ActorData, VecActorSource};
use sheetpress::{ExportBuilder, ExportFormat, ExportRequest, PipelineError};
use std::io::Cursor;

const MM_TO_PT: f32 = 72.0 / 25.4;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

#[test]
fn test_card_pdf_carries_actor_fields() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let pdf = export_pdf(&exporter, "character-card", &rin())?;

    assert_eq!(pdf.page_count(), 1);
    assert_contains_text(&pdf.doc, "Rin Ashgrove");
    assert_contains_text(&pdf.doc, "7/12");
    assert_contains_text(&pdf.doc, "Lantern");
    assert_contains_text(&pdf.doc, "dnd5e 3.1.2");

    let [_, _, width, height] = media_box(&pdf.doc).ok_or("missing MediaBox")?;
    assert!((width - 63.0 * MM_TO_PT).abs() < 0.01);
    assert!((height - 88.0 * MM_TO_PT).abs() < 0.01);

    let fonts = font_names(&pdf.doc);
    assert!(fonts.contains("Helvetica"));
    assert!(fonts.contains("Helvetica-Bold"));
    Ok(())
}

#[test]
fn test_sheet_pdf_is_a4_with_multiline_biography() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let pdf = export_pdf(&exporter, "character-sheet", &rin())?;

    let [_, _, width, height] = media_box(&pdf.doc).ok_or("missing MediaBox")?;
    assert!((width - 595.28).abs() < 0.1);
    assert!((height - 841.89).abs() < 0.1);
    assert_contains_text(&pdf.doc, "Line one");
    assert_contains_text(&pdf.doc, "Line two");
    assert_contains_text(&pdf.doc, "Inventory");
    Ok(())
}

#[test]
fn test_sparse_actor_still_exports() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let kai = ActorData::new("a2", "Kai Vela");
    let pdf = export_pdf(&exporter, "character-card", &kai)?;
    assert_contains_text(&pdf.doc, "Kai Vela");
    // No portrait source: the image is skipped, not drawn as a placeholder.
    assert!(!page_operators(&pdf.doc).iter().any(|op| op == "Do"));
    Ok(())
}

#[test]
fn test_condition_and_repeat_in_custom_template() -> TestResult {
    let exporter = exporter_with_templates(&[&roster_template()])?;

    let pdf = export_pdf(&exporter, "roster", &rin())?;
    assert_contains_text(&pdf.doc, "Has portrait");
    assert_contains_text(&pdf.doc, "Sword");
    assert_contains_text(&pdf.doc, "Rope");
    assert_lacks_text(&pdf.doc, "Lantern");

    let pdf = export_pdf(&exporter, "roster", &ActorData::new("a2", "Kai Vela"))?;
    assert_lacks_text(&pdf.doc, "Has portrait");
    Ok(())
}

#[test]
fn test_portrait_is_embedded_from_resources() -> TestResult {
    let assets = InMemoryResourceProvider::new();
    assets.add("tokens/rin.png", png_bytes(8, 8))?;
    let exporter = ExportBuilder::new()
        .with_builtin_templates()?
        .with_resource_provider(assets)
        .build()?;

    let pdf = export_pdf(&exporter, "character-card", &rin())?;
    let ops = page_operators(&pdf.doc);
    assert_eq!(ops.iter().filter(|op| *op == "Do").count(), 1);
    Ok(())
}

#[test]
fn test_card_png_dimensions() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let artifact = exporter.export_actor(&rin(), &ExportRequest::new("character-card", ExportFormat::Png))?;
    assert_eq!(artifact.mime_type, "image/png");
    assert_eq!(artifact.filename, "rin_ashgrove_character-card.png");

    let img = image::load_from_memory(&artifact.bytes)?;
    assert_eq!((img.width(), img.height()), (1488, 2079));
    Ok(())
}

#[test]
fn test_png_pixel_ratio_override() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let request = ExportRequest::new("character-card", ExportFormat::Png).with_pixel_ratio(1.0);
    let artifact = exporter.export_actor(&rin(), &request)?;
    let img = image::load_from_memory(&artifact.bytes)?;
    assert_eq!((img.width(), img.height()), (744, 1039));
    Ok(())
}

#[test]
fn test_pdf_only_template_rejects_png() -> TestResult {
    let exporter = exporter_with_templates(&[&pdf_only_template()])?;
    for template in ["ledger", "character-sheet"] {
        let result = exporter.export_actor(&rin(), &ExportRequest::new(template, ExportFormat::Png));
        assert!(
            matches!(result, Err(PipelineError::UnsupportedFormat { format: ExportFormat::Png, .. })),
            "{} should refuse PNG",
            template
        );
    }
    Ok(())
}

#[test]
fn test_unknown_template() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let result = exporter.export_actor(&rin(), &ExportRequest::new("tarot", ExportFormat::Pdf));
    assert!(matches!(result, Err(PipelineError::TemplateNotFound(_))));
    Ok(())
}

#[test]
fn test_batch_export_writes_files() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let dir = tempfile::tempdir()?;
    let mut source = VecActorSource::new(party());

    let count = exporter.export_all(
        &mut source,
        &ExportRequest::new("character-card", ExportFormat::Pdf),
        |artifact| {
            artifact.write_to_dir(dir.path())?;
            Ok(())
        },
        || true,
    )?;

    assert_eq!(count, 2);
    assert!(dir.path().join("rin_ashgrove_character-card.pdf").is_file());
    assert!(dir.path().join("kai_vela_character-card.pdf").is_file());
    Ok(())
}

#[test]
fn test_export_actors_collects_in_order() -> TestResult {
    let exporter = exporter_with_templates(&[])?;
    let artifacts = exporter.export_actors(&party(), &ExportRequest::new("character-sheet", ExportFormat::Pdf))?;
    let names: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(names, vec!["rin_ashgrove_character-sheet.pdf", "kai_vela_character-sheet.pdf"]);
    Ok(())
}
