//! Vector PDF backend.
//!
//! Sheets are written as a single-page PDF 1.7 document using the standard
//! Helvetica faces, so no font files are embedded. Images become image
//! XObjects and element opacity is expressed through ExtGState entries.

mod encoding;
mod metrics;
mod page;
mod renderer;
mod xobject;

pub use metrics::HelveticaMetrics;
pub use renderer::PdfRenderer;
