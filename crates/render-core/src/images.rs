//! Image loading for both backends.

use crate::error::RenderError;
use ::image::{ImageFormat, RgbaImage};
use log::debug;
use sheetpress_resource::{ResourceProvider, SharedResourceData, load_source};

/// A loaded image: the original bytes plus a decoded RGBA bitmap.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Format sniffed from the bytes.
    pub format: ImageFormat,
    pub encoded: SharedResourceData,
    pub pixels: RgbaImage,
}

impl DecodedImage {
    pub fn decode(encoded: SharedResourceData) -> Result<Self, RenderError> {
        let format = ::image::guess_format(&encoded)?;
        let pixels = ::image::load_from_memory_with_format(&encoded, format)?.to_rgba8();
        Ok(Self {
            format,
            encoded,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.pixels.pixels().any(|p| p.0[3] < u8::MAX)
    }

    pub fn is_jpeg(&self) -> bool {
        self.format == ImageFormat::Jpeg
    }
}

/// Loads and decodes the image an element points at.
pub fn load_image(src: &str, resources: &dyn ResourceProvider) -> Result<DecodedImage, RenderError> {
    let encoded = load_source(resources, src)?;
    let image = DecodedImage::decode(encoded)?;
    debug!(
        "Decoded {:?} image {}x{} from {}",
        image.format,
        image.width(),
        image.height(),
        resources.name()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{ImageBuffer, Rgba};
    use sheetpress_resource::InMemoryResourceProvider;
    use std::io::Cursor;
    use std::sync::Arc;

    fn png_bytes(alpha: u8) -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_pixel(4, 2, Rgba([200, 10, 10, alpha]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let image = DecodedImage::decode(Arc::new(png_bytes(255))).unwrap();
        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!((image.width(), image.height()), (4, 2));
        assert!(!image.has_alpha());
        assert!(!image.is_jpeg());
    }

    #[test]
    fn test_detects_alpha() {
        let image = DecodedImage::decode(Arc::new(png_bytes(128))).unwrap();
        assert!(image.has_alpha());
    }

    #[test]
    fn test_load_through_provider() {
        let provider = InMemoryResourceProvider::new();
        provider.add("token.png", png_bytes(255)).unwrap();
        assert!(load_image("token.png", &provider).is_ok());
    }

    #[test]
    fn test_missing_and_garbage() {
        let provider = InMemoryResourceProvider::new();
        provider.add("broken.png", b"not an image".to_vec()).unwrap();
        assert!(matches!(load_image("absent.png", &provider), Err(RenderError::Resource(_))));
        assert!(matches!(load_image("broken.png", &provider), Err(RenderError::Image(_))));
    }
}
