use crate::canvas::{Canvas, skia_color};
use crate::fonts::FontLibrary;
use crate::options::RasterOptions;
use log::debug;
use sheetpress_render_core::{DocumentRenderer, RenderError};
use sheetpress_resource::ResourceProvider;
use sheetpress_template::{ExportFormat, ResolvedLayout};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Paints a resolved layout to a PNG.
///
/// The font library is shared, so deriving a renderer with other options
/// is cheap.
#[derive(Debug, Clone, Default)]
pub struct RasterRenderer {
    options: RasterOptions,
    fonts: Arc<FontLibrary>,
}

impl RasterRenderer {
    pub fn new(options: RasterOptions) -> Self {
        Self {
            options,
            fonts: Arc::new(FontLibrary::new()),
        }
    }

    pub fn with_fonts(mut self, fonts: FontLibrary) -> Self {
        self.fonts = Arc::new(fonts);
        self
    }

    /// A renderer sharing these fonts at a different pixel ratio.
    pub fn with_pixel_ratio(&self, pixel_ratio: f32) -> Self {
        Self {
            options: self.options.clone().with_pixel_ratio(pixel_ratio),
            fonts: Arc::clone(&self.fonts),
        }
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Paints `layout` without encoding it.
    pub fn render_pixmap(&self, layout: &ResolvedLayout, resources: &dyn ResourceProvider) -> Result<Pixmap, RenderError> {
        self.options.validate()?;
        let (width, height) = self.options.pixel_size(layout.page_size());
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Raster(format!("cannot allocate a {}x{} canvas", width, height)))?;
        if let Some(background) = &self.options.background {
            pixmap.fill(skia_color(background, 1.0));
        }

        let mut canvas = Canvas::new(pixmap, resources, &self.fonts, self.options.scale());
        for element in &layout.elements {
            canvas.draw_element(element);
        }
        Ok(canvas.pixmap)
    }
}

impl DocumentRenderer for RasterRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn render(&self, layout: &ResolvedLayout, resources: &dyn ResourceProvider) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.render_pixmap(layout, resources)?;
        let png = pixmap
            .encode_png()
            .map_err(|e| RenderError::Raster(e.to_string()))?;
        debug!(
            "Rendered {} element(s) to {}x{} PNG at {} dpi ({} bytes)",
            layout.elements.len(),
            pixmap.width(),
            pixmap.height(),
            self.options.effective_dpi(),
            png.len()
        );
        Ok(png)
    }
}
