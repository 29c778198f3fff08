//! Capture sources feeding the screenshot session
//!
//! The engine never talks to a display server itself; the host hands it a
//! capture through the [`CaptureProvider`] seam.

pub mod image;

use ::image::RgbaImage;
use anyhow::{Result, anyhow};

pub use self::image::CapturedFrame;

/// Source of the full-frame capture a session starts from
pub trait CaptureProvider {
    /// Produce the capture for one session. Errors are fatal to the session.
    fn capture_frame(&mut self) -> Result<CapturedFrame>;
}

/// Provider over an already-decoded bitmap. Yields the frame once.
pub struct StaticProvider {
    frame: Option<CapturedFrame>,
}

impl StaticProvider {
    /// Create a provider from raw RGBA pixels
    pub fn new(rgba: RgbaImage) -> Self {
        Self {
            frame: Some(CapturedFrame::new(rgba)),
        }
    }
}

impl CaptureProvider for StaticProvider {
    fn capture_frame(&mut self) -> Result<CapturedFrame> {
        self.frame
            .take()
            .ok_or_else(|| anyhow!("capture already consumed"))
    }
}

/// Provider over encoded image bytes, decoded when the session starts
pub struct EncodedProvider {
    bytes: Vec<u8>,
}

impl EncodedProvider {
    /// Create a provider from encoded image bytes (PNG, JPEG, ...)
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl CaptureProvider for EncodedProvider {
    fn capture_frame(&mut self) -> Result<CapturedFrame> {
        CapturedFrame::from_encoded(&self.bytes)
    }
}
