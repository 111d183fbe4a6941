//! Element painting onto a pixmap.

use crate::fonts::{FontLibrary, GlyphMetrics};
use log::{debug, warn};
use sheetpress_render_core::{
    DecodedImage, PLACEHOLDER_COLOR, TextFrame, fit_image, layout_text, line_color, load_image, stroke_width_mm,
};
use sheetpress_resource::ResourceProvider;
use sheetpress_style::ResolvedStyle;
use sheetpress_template::{ImageFit, ResolvedElement, ResolvedKind};
use sheetpress_types::{Color, PT_TO_MM, Rect};
use tiny_skia::{
    FillRule, FilterQuality, IntSize, Mask, Paint, Path, PathBuilder, Pattern, Pixmap, SpreadMode, Stroke, Transform,
};
use ttf_parser::OutlineBuilder;

const KAPPA: f32 = 0.552_284_8;

pub(crate) fn skia_color(color: &Color, opacity: f32) -> tiny_skia::Color {
    let alpha = (color.a * opacity).clamp(0.0, 1.0);
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, (alpha * 255.0).round() as u8)
}

fn solid(color: &Color, opacity: f32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color, opacity));
    paint.anti_alias = true;
    paint
}

/// A closed rectangle path in pixel space, rounded when `radius` is positive.
fn rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let r = rect.clamp_radius(radius);
    if r <= 0.0 {
        let bounds = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)?;
        return Some(PathBuilder::from_rect(bounds));
    }
    let k = r * KAPPA;
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Premultiplies a decoded image into a pixmap.
fn image_pixmap(image: &DecodedImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let data = image
        .pixels
        .pixels()
        .flat_map(|p| {
            let [r, g, b, a] = p.0;
            let premultiply = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
            [premultiply(r), premultiply(g), premultiply(b), a]
        })
        .collect();
    Pixmap::from_vec(data, size)
}

/// Feeds glyph outlines into a path, flipping font units to pixel space.
struct GlyphOutline<'a> {
    builder: &'a mut PathBuilder,
    origin_x: f32,
    baseline: f32,
    scale: f32,
}

impl GlyphOutline<'_> {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphOutline<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Paints resolved elements. Layout millimeters are scaled to pixels; both
/// share a top-left origin so no axis flip is needed.
pub(crate) struct Canvas<'a> {
    pub pixmap: Pixmap,
    resources: &'a dyn ResourceProvider,
    fonts: &'a FontLibrary,
    /// Pixels per millimeter.
    scale: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(pixmap: Pixmap, resources: &'a dyn ResourceProvider, fonts: &'a FontLibrary, scale: f32) -> Self {
        Self {
            pixmap,
            resources,
            fonts,
            scale,
        }
    }

    fn px(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x * self.scale,
            rect.y * self.scale,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }

    pub fn draw_element(&mut self, el: &ResolvedElement) {
        match &el.kind {
            ResolvedKind::Text { content, max_lines } => self.draw_text(el, content, *max_lines),
            ResolvedKind::Rect { radius } => match el.bounds() {
                Some(bounds) => self.paint_rect(bounds, radius.unwrap_or(0.0), &el.style, &el.style.fill),
                None => debug!("Skipping rect at ({}, {}) without a size", el.x, el.y),
            },
            ResolvedKind::Line { x2, y2 } => self.draw_line(el, *x2, *y2),
            ResolvedKind::Image { src, fit, radius } => {
                self.draw_image(el, src, *fit, radius.unwrap_or(0.0))
            }
        }
    }

    fn paint_rect(&mut self, bounds: Rect, radius: f32, style: &ResolvedStyle, fill: &Color) {
        let Some(path) = rect_path(self.px(bounds), radius * self.scale) else {
            return;
        };
        if !fill.is_transparent() {
            let paint = solid(fill, style.paint_opacity());
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        if style.has_stroke() {
            let paint = solid(&style.stroke, style.paint_opacity());
            let stroke = Stroke {
                width: stroke_width_mm(style) * self.scale,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn draw_line(&mut self, el: &ResolvedElement, x2: f32, y2: f32) {
        let style = &el.style;
        let color = line_color(style);
        if color.is_transparent() {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(el.x * self.scale, el.y * self.scale);
        pb.line_to(x2 * self.scale, y2 * self.scale);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: stroke_width_mm(style) * self.scale,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid(color, style.paint_opacity()),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn draw_text(&mut self, el: &ResolvedElement, content: &str, max_lines: Option<usize>) {
        let style = &el.style;
        if style.color.is_transparent() || content.trim().is_empty() {
            return;
        }
        let Some(face_id) = self.fonts.query(style) else {
            warn!("No font available for '{}', skipping text", style.font_family);
            return;
        };
        let frame = TextFrame {
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
        };
        let scale = self.scale;
        let path = self.fonts.with_face(face_id, |face| {
            let metrics = GlyphMetrics { face };
            let lines = layout_text(content, frame, style, max_lines, &metrics);
            let font_px = style.font_size * PT_TO_MM * scale;
            let units = font_px / metrics.units_per_em();
            let mut builder = PathBuilder::new();
            for line in &lines {
                let mut outline = GlyphOutline {
                    builder: &mut builder,
                    origin_x: line.x * scale,
                    baseline: line.baseline * scale,
                    scale: units,
                };
                for c in line.text.chars() {
                    let glyph = metrics.glyph(c);
                    face.outline_glyph(glyph, &mut outline);
                    outline.origin_x += metrics.advance(glyph) * units;
                }
            }
            builder.finish()
        });
        match path {
            Some(Some(path)) => {
                self.pixmap.fill_path(
                    &path,
                    &solid(&style.color, style.paint_opacity()),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            Some(None) => {}
            None => warn!("Font face for '{}' could not be parsed", style.font_family),
        }
    }

    fn draw_image(&mut self, el: &ResolvedElement, src: &str, fit: ImageFit, radius: f32) {
        let Some(frame) = el.bounds() else {
            warn!("Skipping image '{}' without a size", src);
            return;
        };
        let image = match load_image(src, self.resources) {
            Ok(image) => image,
            Err(e) => {
                warn!("Drawing placeholder for image '{}': {}", src, e);
                self.paint_rect(frame, radius, &el.style, &PLACEHOLDER_COLOR);
                return;
            }
        };
        let Some(source) = image_pixmap(&image) else {
            warn!("Image '{}' has no pixels", src);
            return;
        };

        let target = self.px(fit_image(frame, image.width(), image.height(), fit));
        let frame_px = self.px(frame);
        let Some(target_rect) = tiny_skia::Rect::from_xywh(target.x, target.y, target.width, target.height) else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.shader = Pattern::new(
            source.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bicubic,
            el.style.paint_opacity(),
            Transform::from_row(
                target.width / image.width() as f32,
                0.0,
                0.0,
                target.height / image.height() as f32,
                target.x,
                target.y,
            ),
        );

        let clip = if radius > 0.0 || fit == ImageFit::Cover {
            self.clip_mask(frame_px, radius * self.scale)
        } else {
            None
        };
        self.pixmap
            .fill_rect(target_rect, &paint, Transform::identity(), clip.as_ref());
    }

    fn clip_mask(&self, frame: Rect, radius: f32) -> Option<Mask> {
        let path = rect_path(frame, radius)?;
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())?;
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        Some(mask)
    }
}
