use super::config::RasterOptions;
use super::exporter::Exporter;
use crate::error::PipelineError;
use sheetpress_render_core::DocumentRenderer;
use sheetpress_render_lopdf::PdfRenderer;
use sheetpress_render_raster::{FontLibrary, RasterRenderer};
use sheetpress_resource::{ChainedResourceProvider, FilesystemResourceProvider, ResourceProvider};
use sheetpress_template::{ExportFormat, TemplateRegistry};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an [`Exporter`].
#[derive(Default)]
pub struct ExportBuilder {
    registry: TemplateRegistry,
    resources: ChainedResourceProvider,
    raster_options: RasterOptions,
    fonts: FontLibrary,
    renderers: HashMap<ExportFormat, Arc<dyn DocumentRenderer>>,
}

impl ExportBuilder {
    /// An empty builder: no templates, no resources, no fonts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the templates shipped with the crate.
    pub fn with_builtin_templates(mut self) -> Result<Self, PipelineError> {
        for template in TemplateRegistry::builtin()?.iter() {
            self.registry.register(template.clone());
        }
        Ok(self)
    }

    /// Registers every `*.json` template in `dir`.
    pub fn with_template_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self, PipelineError> {
        let loaded = self.registry.load_dir(dir.as_ref())?;
        log::info!("Loaded {} template(s) from {}", loaded, dir.as_ref().display());
        Ok(self)
    }

    /// Registers a template from its JSON source.
    pub fn with_template_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.registry.register_json(source)?;
        Ok(self)
    }

    /// Adds a provider for image sources. Providers are tried in the order
    /// they were added.
    pub fn with_resource_provider(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.resources.push(Box::new(provider));
        self
    }

    /// Serves image sources from files under `dir`.
    pub fn with_resource_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_resource_provider(FilesystemResourceProvider::new(dir))
    }

    pub fn with_raster_options(mut self, options: RasterOptions) -> Self {
        self.raster_options = options;
        self
    }

    /// Makes installed system fonts available to the raster backend.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        if system_fonts {
            self.fonts = std::mem::take(&mut self.fonts).with_system_fonts();
        }
        self
    }

    /// Adds a TrueType or OpenType font to the raster backend.
    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        self.fonts.load_font_data(data);
        self
    }

    /// Adds every font file in `dir` to the raster backend.
    pub fn with_font_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.fonts.load_fonts_dir(dir.as_ref());
        self
    }

    /// Replaces the built-in renderer for the format `renderer` produces.
    pub fn with_renderer(mut self, renderer: Arc<dyn DocumentRenderer>) -> Self {
        self.renderers.insert(renderer.format(), renderer);
        self
    }

    /// Consumes the builder and creates the `Exporter`.
    pub fn build(mut self) -> Result<Exporter, PipelineError> {
        if self.registry.is_empty() {
            return Err(PipelineError::Config(
                "No templates have been registered. Use `with_builtin_templates` or `with_template_dir`."
                    .to_string(),
            ));
        }

        self.renderers
            .entry(ExportFormat::Pdf)
            .or_insert_with(|| Arc::new(PdfRenderer::new()));

        let raster = if self.renderers.contains_key(&ExportFormat::Png) {
            None
        } else {
            if self.fonts.is_empty() {
                log::warn!("No fonts loaded; text will be missing from PNG exports");
            }
            let raster = RasterRenderer::new(self.raster_options).with_fonts(self.fonts);
            self.renderers.insert(ExportFormat::Png, Arc::new(raster.clone()));
            Some(raster)
        };

        log::debug!(
            "Exporter ready: {} template(s), {} resource provider(s)",
            self.registry.len(),
            self.resources.len()
        );
        Ok(Exporter {
            registry: self.registry,
            resources: Arc::new(self.resources),
            renderers: self.renderers,
            raster,
        })
    }
}
