//! Screenshot session management module
//!
//! This module contains:
//! - The two-phase session coordinator (crop, then annotate)
//! - Message types for session interactions
//! - Keyboard shortcut handling
//!
//! A session is synchronous and single-threaded: the host feeds it pointer,
//! keyboard, and toolbar events one at a time and repaints from the state it
//! exposes. The only terminal states are a finished artifact or cancellation.

pub mod messages;
pub mod shortcuts;

use anyhow::{Context, Result};

use crate::annotations::Annotator;
use crate::artifact::Artifact;
use crate::capture::{CaptureProvider, CapturedFrame};
use crate::config::EditorConfig;
use crate::crop::{self, RegionSelector};
use crate::domain::{Phase, Point, Rect, SelectorState};
use crate::render::Canvas;

use messages::{EditMsg, Msg, PhaseMsg, PointerMsg};
use shortcuts::KeyContext;

/// Terminal result of a session
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The user confirmed a crop, annotated it, and pressed done
    Finished(Artifact),
    /// The user aborted; no partial artifact exists
    Cancelled,
}

/// Per-phase state. The crop phase owns the selector; the annotate phase
/// owns the canvas, the editor, and the display bounds of the surface.
enum PhaseState {
    Crop {
        selector: RegionSelector,
    },
    Annotate {
        canvas: Canvas,
        annotator: Annotator,
        bounds: Rect,
    },
}

/// A single screenshot-and-annotate interaction from capture to artifact.
///
/// The phase transition is one-way: crop, then annotate. Cancellation is
/// accepted at any time and always yields [`Outcome::Cancelled`].
pub struct ScreenshotSession {
    frame: CapturedFrame,
    viewport: Rect,
    config: EditorConfig,
    phase: PhaseState,
}

impl ScreenshotSession {
    /// Start a session: capture one frame and enter the crop phase.
    ///
    /// A capture or decode failure is fatal; the host should treat the
    /// error as a cancelled session.
    pub fn begin(
        provider: &mut dyn CaptureProvider,
        viewport: Rect,
        config: EditorConfig,
    ) -> Result<Self> {
        let frame = provider
            .capture_frame()
            .context("screenshot session could not capture a frame")?;
        log::debug!(
            "session started: {}x{} viewport over {}x{} capture",
            viewport.w,
            viewport.h,
            frame.width(),
            frame.height()
        );
        Ok(Self {
            frame,
            viewport,
            config,
            phase: PhaseState::Crop {
                selector: RegionSelector::new(viewport),
            },
        })
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        match self.phase {
            PhaseState::Crop { .. } => Phase::Crop,
            PhaseState::Annotate { .. } => Phase::Annotate,
        }
    }

    /// Get the captured frame backing this session
    pub fn captured_frame(&self) -> &CapturedFrame {
        &self.frame
    }

    /// Get the region selector during the crop phase
    pub fn selector(&self) -> Option<&RegionSelector> {
        match &self.phase {
            PhaseState::Crop { selector } => Some(selector),
            _ => None,
        }
    }

    /// Get the annotation editor during the annotate phase
    pub fn annotator(&self) -> Option<&Annotator> {
        match &self.phase {
            PhaseState::Annotate { annotator, .. } => Some(annotator),
            _ => None,
        }
    }

    /// Get the canvas during the annotate phase; its frame is what the
    /// host displays
    pub fn canvas(&self) -> Option<&Canvas> {
        match &self.phase {
            PhaseState::Annotate { canvas, .. } => Some(canvas),
            _ => None,
        }
    }

    /// Tell the session where the annotation surface is displayed, so
    /// pointer positions map onto canvas pixels. Defaults to the confirmed
    /// selection rectangle (annotating in place).
    pub fn set_surface_bounds(&mut self, new_bounds: Rect) {
        if let PhaseState::Annotate { bounds, .. } = &mut self.phase {
            *bounds = new_bounds;
        }
    }

    /// Context for interpreting keyboard input, see [`shortcuts::handle_key`]
    pub fn key_context(&self) -> KeyContext {
        match &self.phase {
            PhaseState::Crop { selector } => KeyContext {
                phase: Phase::Crop,
                text_pending: false,
                confirming: selector.state() == SelectorState::Confirming,
            },
            PhaseState::Annotate { annotator, .. } => KeyContext {
                phase: Phase::Annotate,
                text_pending: annotator.pending_text_anchor().is_some(),
                confirming: false,
            },
        }
    }

    /// Feed one event into the session.
    ///
    /// Returns a terminal [`Outcome`] when the event ends the session, None
    /// otherwise. Errors are fatal (failed extraction or encoding); hosts
    /// should treat them like cancellation.
    pub fn handle(&mut self, msg: Msg) -> Result<Option<Outcome>> {
        // Cancellation wins over any in-flight gesture in either phase
        if matches!(msg, Msg::Phase(PhaseMsg::Cancel)) {
            log::debug!("session cancelled during {:?} phase", self.phase());
            return Ok(Some(Outcome::Cancelled));
        }
        match self.phase {
            PhaseState::Crop { .. } => self.handle_crop(msg),
            PhaseState::Annotate { .. } => self.handle_annotate(msg),
        }
    }

    fn handle_crop(&mut self, msg: Msg) -> Result<Option<Outcome>> {
        let confirmed = {
            let PhaseState::Crop { selector } = &mut self.phase else {
                return Ok(None);
            };
            match msg {
                Msg::Pointer(PointerMsg::Down(x, y)) => {
                    selector.pointer_down(Point::new(x, y));
                    return Ok(None);
                }
                Msg::Pointer(PointerMsg::Move(x, y)) => {
                    selector.pointer_move(Point::new(x, y));
                    return Ok(None);
                }
                Msg::Pointer(PointerMsg::Up(x, y)) => {
                    selector.pointer_up(Point::new(x, y));
                    return Ok(None);
                }
                Msg::Pointer(PointerMsg::Leave) => return Ok(None),
                Msg::Phase(PhaseMsg::RetrySelection) => {
                    selector.retry();
                    return Ok(None);
                }
                // Confirm only moves forward with a valid pending selection
                Msg::Phase(PhaseMsg::ConfirmSelection) => selector.confirm(),
                // Editing and finishing wait for the annotate phase
                Msg::Edit(_) | Msg::Phase(_) => return Ok(None),
            }
        };

        if let Some(selection) = confirmed {
            self.enter_annotate(selection)?;
        }
        Ok(None)
    }

    fn enter_annotate(&mut self, selection: Rect) -> Result<()> {
        let cropped = crop::extract_region(&self.frame, self.viewport, selection)?;
        log::debug!(
            "entering annotate phase with {}x{} crop",
            cropped.width(),
            cropped.height()
        );
        let mut canvas = Canvas::new(cropped, self.config.stroke_width, self.config.text_size)?;
        // Present the bare crop before any annotation exists
        canvas.render(&[], None);
        self.phase = PhaseState::Annotate {
            canvas,
            annotator: Annotator::new(&self.config),
            bounds: selection,
        };
        Ok(())
    }

    fn handle_annotate(&mut self, msg: Msg) -> Result<Option<Outcome>> {
        let PhaseState::Annotate {
            canvas,
            annotator,
            bounds,
        } = &mut self.phase
        else {
            return Ok(None);
        };

        match msg {
            Msg::Pointer(pointer) => {
                let map = |x, y| Point::from_pointer(x, y, *bounds, canvas.width(), canvas.height());
                match pointer {
                    PointerMsg::Down(x, y) => annotator.pointer_down(map(x, y)),
                    PointerMsg::Move(x, y) => annotator.pointer_move(map(x, y)),
                    PointerMsg::Up(_, _) => annotator.pointer_up(),
                    PointerMsg::Leave => annotator.pointer_leave(),
                }
            }
            Msg::Edit(edit) => match edit {
                EditMsg::SetTool(tool) => annotator.set_tool(tool),
                EditMsg::SetColor(color) => annotator.set_color(color),
                EditMsg::CommitText(text) => annotator.commit_text(&text),
                EditMsg::CancelText => annotator.cancel_text(),
                EditMsg::Undo => annotator.undo(),
                EditMsg::Redo => annotator.redo(),
                EditMsg::Clear => annotator.clear(),
            },
            Msg::Phase(PhaseMsg::Finish) => {
                let artifact = canvas.flatten()?;
                log::debug!(
                    "session finished: {}x{} artifact with {} annotations",
                    artifact.width(),
                    artifact.height(),
                    annotator.log().len()
                );
                return Ok(Some(Outcome::Finished(artifact)));
            }
            // Crop-phase control is meaningless here
            Msg::Phase(_) => {}
        }

        // Recomposite so the host always displays the latest state
        let log = annotator.log();
        canvas.render(log.committed(), log.current());
        Ok(None)
    }
}
