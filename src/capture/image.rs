//! Captured frame type for the crop phase

use anyhow::{Context, Result};
use image::RgbaImage;

/// A full-frame capture at native pixel resolution
#[derive(Clone, Debug)]
pub struct CapturedFrame {
    pub rgba: RgbaImage,
}

impl CapturedFrame {
    /// Create a captured frame from raw RGBA pixels
    pub fn new(rgba: RgbaImage) -> Self {
        log::debug!(
            "frame captured: {}x{} pixels",
            rgba.width(),
            rgba.height()
        );
        Self { rgba }
    }

    /// Decode an encoded capture (PNG, JPEG, ...). Failure here is fatal to
    /// the session that requested the capture.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).context("captured frame failed to decode")?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}
