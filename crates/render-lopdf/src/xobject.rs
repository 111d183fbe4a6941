//! Image XObjects.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use sheetpress_render_core::{DecodedImage, RenderError};
use std::io::Write;

pub(crate) fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Adds `image` to the document as an image XObject.
///
/// Opaque JPEGs are embedded as-is. Everything else is stored as deflated
/// RGB samples, with a soft mask when the image has transparency.
pub(crate) fn embed_image(doc: &mut Document, image: &DecodedImage) -> Result<ObjectId, RenderError> {
    let width = image.width() as i64;
    let height = image.height() as i64;
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width,
        "Height" => height,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };

    if image.is_jpeg() && !image.has_alpha() {
        dict.set("Filter", "DCTDecode");
        let stream = Stream::new(dict, image.encoded.to_vec()).with_compression(false);
        return Ok(doc.add_object(stream));
    }

    let rgb: Vec<u8> = image
        .pixels
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();

    if image.has_alpha() {
        let alpha: Vec<u8> = image.pixels.pixels().map(|p| p.0[3]).collect();
        let mask = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        let mask_id = doc.add_object(Stream::new(mask, deflate(&alpha)?).with_compression(false));
        dict.set("SMask", Object::Reference(mask_id));
    }

    dict.set("Filter", "FlateDecode");
    Ok(doc.add_object(Stream::new(dict, deflate(&rgb)?).with_compression(false)))
}
