//! Geometric types for crop regions and annotation coordinates

/// A position in canvas pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point from coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map a pointer position in viewport coordinates into the pixel space of
    /// a surface shown at `bounds` whose backing store is `pixel_w` x `pixel_h`.
    ///
    /// Display size and backing resolution are scaled independently per axis,
    /// so non-integer ratios (fractional scaling, zoomed previews) map exactly.
    pub fn from_pointer(px: f32, py: f32, bounds: Rect, pixel_w: u32, pixel_h: u32) -> Self {
        let scale_x = if bounds.w > 0.0 {
            pixel_w as f32 / bounds.w
        } else {
            1.0
        };
        let scale_y = if bounds.h > 0.0 {
            pixel_h as f32 / bounds.h
        } else {
            1.0
        };
        Self {
            x: (px - bounds.x) * scale_x,
            y: (py - bounds.y) * scale_y,
        }
    }
}

/// Axis-aligned rectangle in display coordinates, always normalized
/// (non-negative width and height)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from origin and size
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Create a rectangle spanning two arbitrary corner points
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    /// Create a rectangle of the given size at the origin
    pub fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Get the right edge coordinate
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Get the bottom edge coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Calculate the intersection of two rectangles
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Check if this rectangle contains a point
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Map this rectangle from display space into the pixel space of a
    /// bitmap backing the `viewport`, scaling each axis independently.
    ///
    /// The result is clamped to the bitmap bounds.
    pub fn to_pixel_region(&self, viewport: Rect, pixel_w: u32, pixel_h: u32) -> PixelRegion {
        let scale_x = if viewport.w > 0.0 {
            pixel_w as f32 / viewport.w
        } else {
            1.0
        };
        let scale_y = if viewport.h > 0.0 {
            pixel_h as f32 / viewport.h
        } else {
            1.0
        };

        let x = (((self.x - viewport.x) * scale_x).round().max(0.0) as u32).min(pixel_w);
        let y = (((self.y - viewport.y) * scale_y).round().max(0.0) as u32).min(pixel_h);
        let w = ((self.w * scale_x).round() as u32).min(pixel_w - x);
        let h = ((self.h * scale_y).round() as u32).min(pixel_h - y);

        PixelRegion { x, y, w, h }
    }
}

/// A region of a bitmap in its native pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRegion {
    /// Check if this region covers any pixels
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Compute the opaque strips covering everything outside `selection` within
/// `viewport`: top and bottom strips span the full viewport width, left and
/// right strips are bounded to the selection height.
///
/// Without a selection the entire viewport is covered by a single strip.
/// Degenerate (zero-extent) strips are kept so callers always see the same
/// strip layout; they cover no pixels when drawn.
pub fn mask_strips(viewport: Rect, selection: Option<Rect>) -> Vec<Rect> {
    let sel = selection.and_then(|s| s.intersect(viewport));
    let Some(sel) = sel else {
        return vec![viewport];
    };

    vec![
        // Top, full width
        Rect::new(viewport.x, viewport.y, viewport.w, sel.y - viewport.y),
        // Bottom, full width
        Rect::new(
            viewport.x,
            sel.bottom(),
            viewport.w,
            viewport.bottom() - sel.bottom(),
        ),
        // Left, selection height
        Rect::new(viewport.x, sel.y, sel.x - viewport.x, sel.h),
        // Right, selection height
        Rect::new(sel.right(), sel.y, viewport.right() - sel.right(), sel.h),
    ]
}
