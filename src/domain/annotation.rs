//! Annotation types for drawing on the cropped screenshot
//!
//! All annotations store coordinates in canvas pixel space.

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use crate::config::ShapeColor;

/// Drawing tool for annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Rectangle,
    Arrow,
    Freehand,
    Text,
}

impl Tool {
    /// Minimum number of points needed before the annotation produces pixels
    pub fn min_points(self) -> usize {
        match self {
            Tool::Rectangle | Tool::Arrow | Tool::Freehand => 2,
            Tool::Text => 1,
        }
    }
}

/// A single mark drawn on the screenshot
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Tool that produced this annotation
    pub tool: Tool,
    /// Color chosen when the annotation was created
    pub color: ShapeColor,
    /// Geometry in canvas pixel space: two corner points for rectangles,
    /// tail and head for arrows, the full polyline for freehand strokes,
    /// a single anchor for text
    pub points: Vec<Point>,
    /// Text content, present only for the text tool
    pub text: Option<String>,
}

impl Annotation {
    /// Create a shape annotation anchored at `origin` with both points
    /// coincident, so it renders immediately as a dot
    pub fn shape(tool: Tool, color: ShapeColor, origin: Point) -> Self {
        Self {
            tool,
            color,
            points: vec![origin, origin],
            text: None,
        }
    }

    /// Create a text annotation at `anchor`
    pub fn text(color: ShapeColor, anchor: Point, text: String) -> Self {
        Self {
            tool: Tool::Text,
            color,
            points: vec![anchor],
            text: Some(text),
        }
    }

    /// Check whether this annotation has enough geometry to produce pixels.
    /// Annotations that don't are valid data but draw nothing.
    pub fn is_drawable(&self) -> bool {
        if self.points.len() < self.tool.min_points() {
            return false;
        }
        match self.tool {
            Tool::Text => self.text.as_deref().is_some_and(|t| !t.is_empty()),
            _ => true,
        }
    }

    /// Check whether every point coincides (a click without movement)
    pub fn is_degenerate(&self) -> bool {
        match self.points.first() {
            Some(first) => self.points.iter().all(|p| p == first),
            None => true,
        }
    }

    /// Replace the moving endpoint, keeping the anchor fixed
    pub fn set_endpoint(&mut self, p: Point) {
        if let Some(end) = self.points.get_mut(1) {
            *end = p;
        } else {
            self.points.push(p);
        }
    }

    /// Append a point to a freehand polyline. The seed duplicate from the
    /// initial press is collapsed so the stored stroke is exactly the
    /// press position followed by each motion position.
    pub fn push_point(&mut self, p: Point) {
        if self.points.len() == 2 && self.points[0] == self.points[1] {
            self.points[1] = p;
        } else {
            self.points.push(p);
        }
    }
}
