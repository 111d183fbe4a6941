use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// BaseFont names of every font dictionary in the document.
pub fn font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let inline = page_font_dicts(doc);
    doc.objects
        .values()
        .chain(inline.iter())
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| dict.get(b"Type").and_then(Object::as_name).is_ok_and(|n| n == b"Font"))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect()
}

/// Font dictionaries embedded directly in page resources.
fn page_font_dicts(doc: &LopdfDocument) -> Vec<Object> {
    let mut fonts = Vec::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Ok(resources) = page.get(b"Resources").and_then(Object::as_dict) else {
            continue;
        };
        if let Ok(font_dict) = resources.get(b"Font").and_then(Object::as_dict) {
            fonts.extend(font_dict.iter().map(|(_, font)| font.clone()));
        }
    }
    fonts
}

/// Operators of the first page's content stream, in order.
pub fn page_operators(doc: &LopdfDocument) -> Vec<String> {
    let Some(page_id) = doc.get_pages().values().next().copied() else {
        return Vec::new();
    };
    doc.get_page_content(page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations.into_iter().map(|op| op.operator).collect())
        .unwrap_or_default()
}

/// The first page's MediaBox as `[llx, lly, urx, ury]` in points.
pub fn media_box(doc: &LopdfDocument) -> Option<[f32; 4]> {
    let page_id = doc.get_pages().values().next().copied()?;
    let page = doc.get_dictionary(page_id).ok()?;
    let values = page.get(b"MediaBox").and_then(Object::as_array).ok()?;
    let mut out = [0.0; 4];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value.as_float().ok()?;
    }
    Some(out)
}

pub fn assert_contains_text(doc: &LopdfDocument, expected: &str) {
    let text = extract_text(doc);
    assert!(
        text.contains(expected),
        "Expected PDF to contain '{}', but got:\n{}",
        expected,
        text
    );
}

pub fn assert_lacks_text(doc: &LopdfDocument, unexpected: &str) {
    let text = extract_text(doc);
    assert!(
        !text.contains(unexpected),
        "Expected PDF not to contain '{}', but got:\n{}",
        unexpected,
        text
    );
}
