//! Character sheet export.
//!
//! Binds exported actor data to a sheet template, resolves it into a flat
//! layout and paints that layout as a PDF or PNG.
//!
//! ```ignore
//! use sheetpress::{ExportBuilder, ExportFormat, ExportRequest};
//!
//! let exporter = ExportBuilder::new()
//!     .with_builtin_templates()?
//!     .with_resource_dir("assets")
//!     .build()?;
//! let request = ExportRequest::new("character-card", ExportFormat::Pdf);
//! let artifact = exporter.export_actor(&actor, &request)?;
//! std::fs::write(&artifact.filename, &artifact.bytes)?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{BatchFilenames, ExportArtifact, ExportBuilder, ExportRequest, Exporter, RasterOptions, artifact_filename};

pub use sheetpress_render_core as render_core;
pub use sheetpress_resource as resource;
pub use sheetpress_source as source;
pub use sheetpress_template as template;
pub use sheetpress_template::{ExportFormat, ResolvedLayout, TemplateDefinition, TemplateRegistry};
