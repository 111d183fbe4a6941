use crate::page::{FONTS, PageContext};
use crate::xobject::deflate;
use log::debug;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use sheetpress_render_core::{DocumentRenderer, RenderError};
use sheetpress_resource::ResourceProvider;
use sheetpress_template::{ExportFormat, ResolvedLayout};
use sheetpress_types::{MM_TO_PT, Size};

fn pdf_err(e: lopdf::Error) -> RenderError {
    RenderError::Pdf(e.to_string())
}

/// Writes a resolved layout as a one-page PDF sized to the template.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    compress: bool,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self { compress: true }
    }

    /// Whether content streams are deflated. On by default.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    fn font_dictionary(doc: &mut Document) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (resource, base_font) in FONTS {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(resource, font_id);
        }
        fonts
    }
}

impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, layout: &ResolvedLayout, resources: &dyn ResourceProvider) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let fonts = Self::font_dictionary(&mut doc);

        let mut page = PageContext::new(&mut doc, resources, layout.height);
        for element in &layout.elements {
            page.draw_element(element);
        }
        let (content, page_resources) = page.finish();

        let mut resources_dict = dictionary! { "Font" => fonts };
        if !page_resources.xobjects.is_empty() {
            resources_dict.set("XObject", page_resources.xobjects);
        }
        if !page_resources.ext_g_states.is_empty() {
            resources_dict.set("ExtGState", page_resources.ext_g_states);
        }
        let resources_id = doc.add_object(resources_dict);

        let encoded = content.encode().map_err(pdf_err)?;
        let content_stream = if self.compress {
            Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflate(&encoded)?)
        } else {
            Stream::new(Dictionary::new(), encoded)
        };
        let content_id = doc.add_object(content_stream.with_compression(false));

        let Size { width, height } = layout.page_size().scale(MM_TO_PT);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        debug!(
            "Rendered {} element(s) to {} byte PDF ({:.1}x{:.1}pt)",
            layout.elements.len(),
            out.len(),
            width,
            height
        );
        Ok(out)
    }
}
