//! Owned drawing surface for the annotation phase

use ab_glyph::FontArc;
use anyhow::{Result, anyhow};
use image::RgbaImage;

use super::{shapes, text};
use crate::artifact::Artifact;
use crate::domain::{Annotation, Tool};

/// One canvas per session, sized to the cropped bitmap.
///
/// `render` recomposites the full frame from the base bitmap and the given
/// annotations, so repeated calls with the same input produce byte-identical
/// frames and dragging never smears.
pub struct Canvas {
    base: RgbaImage,
    frame: RgbaImage,
    font: Option<FontArc>,
    stroke_width: f32,
    text_size: f32,
    rendered: bool,
}

impl Canvas {
    /// Create a canvas over the cropped bitmap
    pub fn new(base: RgbaImage, stroke_width: f32, text_size: f32) -> Result<Self> {
        if base.width() == 0 || base.height() == 0 {
            return Err(anyhow!("cannot create canvas from an empty bitmap"));
        }
        let frame = base.clone();
        Ok(Self {
            base,
            frame,
            font: text::load_font(),
            stroke_width,
            text_size,
            rendered: false,
        })
    }

    /// Get the canvas width in pixels
    pub fn width(&self) -> u32 {
        self.base.width()
    }

    /// Get the canvas height in pixels
    pub fn height(&self) -> u32 {
        self.base.height()
    }

    /// Get the last rendered frame for display
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Check if a font is available for text annotations
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Recomposite the frame: the base bitmap, then each committed
    /// annotation in log order, then the in-progress annotation on top
    pub fn render(&mut self, committed: &[Annotation], current: Option<&Annotation>) {
        self.frame.copy_from_slice(&self.base);
        for annotation in committed {
            self.draw(annotation);
        }
        if let Some(annotation) = current {
            self.draw(annotation);
        }
        self.rendered = true;
    }

    fn draw(&mut self, annotation: &Annotation) {
        match annotation.tool {
            Tool::Text => {
                if let Some(font) = &self.font {
                    text::draw_text_annotation(&mut self.frame, annotation, font, self.text_size);
                }
            }
            _ => shapes::draw_annotation(&mut self.frame, annotation, self.stroke_width),
        }
    }

    /// Encode the current frame as a PNG artifact. Before the first render
    /// this yields the unannotated base bitmap.
    pub fn flatten(&self) -> Result<Artifact> {
        let frame = if self.rendered { &self.frame } else { &self.base };
        Artifact::encode(frame)
    }
}
