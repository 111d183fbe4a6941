//! Export pipeline: template lookup, format validation, resolution and
//! rendering, one actor at a time.

mod builder;
mod config;
mod exporter;

pub use builder::ExportBuilder;
pub use config::{BatchFilenames, ExportArtifact, ExportRequest, RasterOptions, artifact_filename};
pub use exporter::Exporter;
