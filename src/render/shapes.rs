//! Shape rendering onto the canvas frame using tiny-skia
//!
//! Each draw call builds its own paint and stroke, so no style state
//! leaks between annotations.

use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{self, arrow, shape};
use crate::config::ShapeColor;
use crate::domain::{Annotation, Point, Rect, Tool};

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
pub(crate) fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
}

fn solid_paint(color: ShapeColor, alpha: u8) -> Paint<'static> {
    let [r, g, b, _] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, alpha);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Draw one shape annotation onto the frame. Annotations without enough
/// geometry draw nothing; zero-extent gestures draw a dot so a plain
/// click still leaves a visible mark.
pub fn draw_annotation(img: &mut RgbaImage, annotation: &Annotation, stroke_width: f32) {
    if !annotation.is_drawable() {
        return;
    }
    if annotation.is_degenerate() {
        if let Some(center) = annotation.points.first() {
            draw_dot(img, *center, stroke_width, annotation.color);
        }
        return;
    }
    match annotation.tool {
        Tool::Rectangle => draw_rectangle(img, annotation, stroke_width),
        Tool::Arrow => draw_arrow(img, annotation, stroke_width),
        Tool::Freehand => draw_freehand(img, annotation, stroke_width),
        // Text is rendered in a separate pass via imageproc
        Tool::Text => {}
    }
}

/// Darken the mask strips of the crop overlay
pub fn draw_mask_strips(img: &mut RgbaImage, strips: &[Rect]) {
    with_pixmap(img, |pixmap| {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 77); // ~0.3

        for strip in strips {
            if let Some(rect) = tiny_skia::Rect::from_xywh(strip.x, strip.y, strip.w, strip.h) {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }
    });
}

fn draw_dot(img: &mut RgbaImage, center: Point, radius: f32, color: ShapeColor) {
    with_pixmap(img, |pixmap| {
        let mut pb = PathBuilder::new();
        pb.push_circle(center.x, center.y, radius.max(1.0));
        let Some(path) = pb.finish() else {
            return;
        };
        let paint = solid_paint(color, 255);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    });
}

fn draw_rectangle(img: &mut RgbaImage, annotation: &Annotation, stroke_width: f32) {
    let (Some(a), Some(b)) = (annotation.points.first(), annotation.points.get(1)) else {
        return;
    };
    let (min_x, min_y, max_x, max_y) = geometry::normalize_rect(a.x, a.y, b.x, b.y);

    with_pixmap(img, |pixmap| {
        // Translucent interior fill so the area reads as highlighted
        if let Some(rect) = tiny_skia::Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
        {
            let fill = solid_paint(annotation.color, shape::FILL_ALPHA);
            pixmap.fill_rect(rect, &fill, Transform::identity(), None);
        }

        let mut pb = PathBuilder::new();
        pb.move_to(min_x, min_y);
        pb.line_to(max_x, min_y);
        pb.line_to(max_x, max_y);
        pb.line_to(min_x, max_y);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let paint = solid_paint(annotation.color, 255);
        let stroke = round_stroke(stroke_width);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    });
}

fn draw_arrow(img: &mut RgbaImage, annotation: &Annotation, stroke_width: f32) {
    let (Some(from), Some(to)) = (annotation.points.first(), annotation.points.get(1)) else {
        return;
    };
    let (from, to) = (*from, *to);

    with_pixmap(img, |pixmap| {
        let paint = solid_paint(annotation.color, 255);

        // Shaft with rounded caps
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            let stroke = round_stroke(stroke_width);
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        // Filled triangular head at the released end
        if let Some((h1x, h1y, h2x, h2y)) =
            arrow::head_points(from.x, from.y, to.x, to.y, arrow::HEAD_LENGTH)
        {
            let mut pb = PathBuilder::new();
            pb.move_to(to.x, to.y);
            pb.line_to(h1x, h1y);
            pb.line_to(h2x, h2y);
            pb.close();
            if let Some(path) = pb.finish() {
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    });
}

fn draw_freehand(img: &mut RgbaImage, annotation: &Annotation, stroke_width: f32) {
    let Some(first) = annotation.points.first() else {
        return;
    };

    with_pixmap(img, |pixmap| {
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in &annotation.points[1..] {
            pb.line_to(p.x, p.y);
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let paint = solid_paint(annotation.color, 255);
        let stroke = round_stroke(stroke_width);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    });
}
