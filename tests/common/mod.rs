pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use sheetpress::{ExportBuilder, ExportFormat, ExportRequest, Exporter, PipelineError};
use sheetpress::source::ActorData;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around an exported PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// An exporter with the built-in templates plus `extra` template sources.
pub fn exporter_with_templates(extra: &[&str]) -> Result<Exporter, PipelineError> {
    let mut builder = ExportBuilder::new().with_builtin_templates()?;
    for source in extra {
        builder = builder.with_template_source(source)?;
    }
    builder.build()
}

/// Exports `actor` as a PDF and loads the result back.
pub fn export_pdf(exporter: &Exporter, template_id: &str, actor: &ActorData) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let artifact = exporter.export_actor(actor, &ExportRequest::new(template_id, ExportFormat::Pdf))?;
    GeneratedPdf::from_bytes(artifact.bytes)
}
