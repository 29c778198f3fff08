//! Screenshot crop and annotation engine for feedback capture.
//!
//! The engine is headless: a host application captures a frame, feeds
//! pointer, keyboard, and toolbar events into a [`ScreenshotSession`], and
//! repaints from the state the session exposes. A session runs two one-way
//! phases:
//!
//! 1. **Crop** — the user drags a region over the capture; everything
//!    outside it is masked. The selection can be redone or confirmed.
//! 2. **Annotate** — the cropped bitmap becomes a canvas; rectangles,
//!    arrows, freehand strokes, and text notes accumulate in an ordered
//!    log with undo and redo.
//!
//! Finishing flattens the canvas into a PNG [`Artifact`]; cancelling at any
//! point produces nothing.
//!
//! ```no_run
//! use redpen::{EditorConfig, Msg, Outcome, ScreenshotSession, StaticProvider};
//! use redpen::domain::Rect;
//!
//! # fn main() -> anyhow::Result<()> {
//! # let capture = image::RgbaImage::new(1920, 1080);
//! let mut provider = StaticProvider::new(capture);
//! let mut session = ScreenshotSession::begin(
//!     &mut provider,
//!     Rect::from_size(1920.0, 1080.0),
//!     EditorConfig::load(),
//! )?;
//!
//! session.handle(Msg::pointer_down(100.0, 100.0))?;
//! session.handle(Msg::pointer_up(600.0, 400.0))?;
//! session.handle(Msg::confirm_selection())?;
//!
//! if let Some(Outcome::Finished(artifact)) = session.handle(Msg::finish())? {
//!     std::fs::write("feedback.png", artifact.png_bytes())?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod annotations;
pub mod artifact;
pub mod capture;
pub mod config;
pub mod crop;
pub mod domain;
pub mod render;
pub mod session;

pub use annotations::{AnnotationLog, Annotator};
pub use artifact::Artifact;
pub use capture::{CaptureProvider, CapturedFrame, EncodedProvider, StaticProvider};
pub use config::{EditorConfig, SaveLocation, ShapeColor};
pub use crop::RegionSelector;
pub use domain::{Annotation, Phase, Tool};
pub use render::Canvas;
pub use session::messages::Msg;
pub use session::{Outcome, ScreenshotSession};
