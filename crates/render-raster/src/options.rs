use sheetpress_render_core::RenderError;
use sheetpress_types::{Color, Size, mm_to_px};

/// Print density used for raster exports.
pub const EXPORT_DPI: f32 = 300.0;

/// Supersampling factor applied on top of the export density.
pub const DEFAULT_PIXEL_RATIO: f32 = 2.0;

/// Whether a density factor can size a canvas: finite and above zero.
pub fn is_valid_scale(factor: f32) -> bool {
    factor.is_finite() && factor > 0.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub dpi: f32,
    pub pixel_ratio: f32,
    /// Canvas fill before painting. `None` leaves it transparent.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            dpi: EXPORT_DPI,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            background: None,
        }
    }
}

impl RasterOptions {
    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Rejects densities that would collapse the canvas.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !is_valid_scale(self.dpi) {
            return Err(RenderError::Raster(format!("invalid dpi {}", self.dpi)));
        }
        if !is_valid_scale(self.pixel_ratio) {
            return Err(RenderError::Raster(format!("invalid pixel ratio {}", self.pixel_ratio)));
        }
        Ok(())
    }

    /// Pixels per inch of the encoded image.
    pub fn effective_dpi(&self) -> f32 {
        self.dpi * self.pixel_ratio
    }

    /// Pixels per millimeter.
    pub fn scale(&self) -> f32 {
        mm_to_px(1.0, self.effective_dpi())
    }

    /// Canvas size for a page measured in millimeters.
    pub fn pixel_size(&self, page: Size) -> (u32, u32) {
        let px = page.scale(self.scale());
        let side = |v: f32| v.round().max(1.0) as u32;
        (side(px.width), side(px.height))
    }
}
