use crate::error::RenderError;
use sheetpress_resource::ResourceProvider;
use sheetpress_template::{ExportFormat, ResolvedLayout};

/// A backend that paints a resolved layout into an encoded artifact.
///
/// Renderers are stateless between calls; one instance may serve many
/// exports.
pub trait DocumentRenderer: Send + Sync {
    /// The artifact format this renderer produces.
    fn format(&self) -> ExportFormat;

    /// Paints `layout` and returns the encoded artifact. Images are loaded
    /// through `resources`; an image that cannot be loaded is painted as a
    /// placeholder and does not fail the render.
    fn render(
        &self,
        layout: &ResolvedLayout,
        resources: &dyn ResourceProvider,
    ) -> Result<Vec<u8>, RenderError>;
}
