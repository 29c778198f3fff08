//! Region selection over the captured frame
//!
//! The selector runs in display coordinates over a full-viewport preview.
//! Confirmed selections are mapped into the capture's native pixel space
//! only at extraction time, so arbitrary display/native ratios stay exact.

use anyhow::{Result, anyhow};
use image::RgbaImage;

use crate::capture::CapturedFrame;
use crate::domain::{Point, Rect, SelectorState, mask_strips};
use crate::render::shapes::draw_mask_strips;

/// Minimum drag extent on both axes for a selection to count.
/// Anything smaller is treated as an accidental click.
pub const DEAD_ZONE: f32 = 10.0;

/// Drag-driven region selector for the crop phase
#[derive(Clone, Debug)]
pub struct RegionSelector {
    viewport: Rect,
    state: SelectorState,
    origin: Option<Point>,
    selection: Option<Rect>,
}

impl RegionSelector {
    /// Create a selector covering the given viewport
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            state: SelectorState::Idle,
            origin: None,
            selection: None,
        }
    }

    /// Get the current interaction state
    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Get the viewport this selector covers
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Get the current selection rectangle, normalized
    pub fn selection(&self) -> Option<Rect> {
        self.selection
    }

    /// Handle a pointer press in viewport coordinates
    pub fn pointer_down(&mut self, pos: Point) {
        if self.state != SelectorState::Idle {
            return;
        }
        self.origin = Some(pos);
        self.selection = None;
        self.state = SelectorState::Dragging;
    }

    /// Handle pointer motion, growing or shrinking the selection
    pub fn pointer_move(&mut self, pos: Point) {
        if self.state != SelectorState::Dragging {
            return;
        }
        if let Some(origin) = self.origin {
            self.selection = Some(Rect::from_corners(origin, pos));
        }
    }

    /// Handle a pointer release. Large enough selections move to the
    /// confirming state; anything within the dead zone is discarded.
    pub fn pointer_up(&mut self, pos: Point) {
        if self.state != SelectorState::Dragging {
            return;
        }
        let selection = self
            .origin
            .map(|origin| Rect::from_corners(origin, pos));

        match selection {
            Some(rect) if rect.w > DEAD_ZONE && rect.h > DEAD_ZONE => {
                self.selection = Some(rect);
                self.state = SelectorState::Confirming;
            }
            _ => {
                self.selection = None;
                self.origin = None;
                self.state = SelectorState::Idle;
            }
        }
    }

    /// Discard the pending selection and return to idle so the user can
    /// drag again
    pub fn retry(&mut self) {
        self.selection = None;
        self.origin = None;
        self.state = SelectorState::Idle;
    }

    /// Get the confirmed selection, available only while confirming
    pub fn confirm(&self) -> Option<Rect> {
        match self.state {
            SelectorState::Confirming => self.selection,
            _ => None,
        }
    }

    /// Opaque strips covering everything outside the selection. Without a
    /// selection the whole viewport is covered.
    pub fn mask_strips(&self) -> Vec<Rect> {
        mask_strips(self.viewport, self.selection)
    }

    /// Darken the masked area of a viewport-sized preview image in place
    pub fn render_mask(&self, preview: &mut RgbaImage) {
        draw_mask_strips(preview, &self.mask_strips());
    }
}

/// Copy the native pixels behind a confirmed selection into a standalone
/// bitmap. The selection is scaled from display to native space per axis.
pub fn extract_region(
    frame: &CapturedFrame,
    viewport: Rect,
    selection: Rect,
) -> Result<RgbaImage> {
    let region = selection.to_pixel_region(viewport, frame.width(), frame.height());
    if region.is_empty() {
        return Err(anyhow!("selection covers no source pixels"));
    }
    log::debug!(
        "extracting {}x{} at ({}, {}) from {}x{} capture",
        region.w,
        region.h,
        region.x,
        region.y,
        frame.width(),
        frame.height()
    );
    Ok(image::imageops::crop_imm(&frame.rgba, region.x, region.y, region.w, region.h).to_image())
}
