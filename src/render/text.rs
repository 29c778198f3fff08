//! Text annotation rendering using imageproc and system fonts

use ab_glyph::FontArc;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use super::geometry::text::SHADOW_OFFSET;
use crate::domain::{Annotation, Tool};

/// Candidate bold fonts, tried in order at canvas creation
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Load the first available bold font. None disables the text pass; other
/// annotation tools keep working.
pub fn load_font() -> Option<FontArc> {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(font) = FontArc::try_from_vec(bytes) {
                log::debug!("text annotations using font {}", path);
                return Some(font);
            }
        }
    }
    log::warn!("no usable font found, text annotations will not render");
    None
}

/// Draw one text annotation onto the frame: a dark drop shadow first, then
/// the text itself in the annotation color.
pub fn draw_text_annotation(img: &mut RgbaImage, annotation: &Annotation, font: &FontArc, size: f32) {
    if annotation.tool != Tool::Text || !annotation.is_drawable() {
        return;
    }
    let (Some(anchor), Some(content)) = (annotation.points.first(), annotation.text.as_deref())
    else {
        return;
    };

    let x = anchor.x as i32;
    let y = anchor.y as i32;
    let [r, g, b, a] = annotation.color.to_rgba_u8();

    draw_text_mut(
        img,
        Rgba([0, 0, 0, 255]),
        x + SHADOW_OFFSET,
        y + SHADOW_OFFSET,
        size,
        font,
        content,
    );
    draw_text_mut(img, Rgba([r, g, b, a]), x, y, size, font, content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeColor;
    use crate::domain::Point;

    #[test]
    fn test_text_changes_pixels_near_anchor() {
        // Skip on hosts without any of the candidate fonts
        let Some(font) = load_font() else {
            return;
        };

        let mut img = RgbaImage::from_pixel(200, 80, image::Rgba([255, 255, 255, 255]));
        let before = img.clone();
        let ann = Annotation::text(
            ShapeColor::from_rgb8(0, 0, 255),
            Point::new(20.0, 20.0),
            "Bug here".to_string(),
        );
        draw_text_annotation(&mut img, &ann, &font, 18.0);
        assert_ne!(img.as_raw(), before.as_raw());
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let Some(font) = load_font() else {
            return;
        };

        let mut img = RgbaImage::from_pixel(100, 40, image::Rgba([255, 255, 255, 255]));
        let before = img.clone();
        let ann = Annotation {
            tool: Tool::Text,
            color: ShapeColor::default(),
            points: vec![Point::new(10.0, 10.0)],
            text: Some(String::new()),
        };
        draw_text_annotation(&mut img, &ann, &font, 18.0);
        assert_eq!(img.as_raw(), before.as_raw());
    }
}
