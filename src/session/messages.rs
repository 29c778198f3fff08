//! Message types for screenshot sessions
//!
//! This module contains:
//! - Msg enum with nested sub-enums for organized event handling
//! - Convenience constructors so hosts never spell out the nesting

use crate::config::ShapeColor;
use crate::domain::Tool;

// ============================================================================
// Pointer Event Types
// ============================================================================

/// Pointer events in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Button pressed at position
    Down(f32, f32),
    /// Pointer moved to position
    Move(f32, f32),
    /// Button released at position
    Up(f32, f32),
    /// Pointer left the surface
    Leave,
}

// ============================================================================
// Annotation Editing Types
// ============================================================================

/// Annotation editing messages, meaningful during the annotate phase
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Select the tool for the next annotation
    SetTool(Tool),
    /// Select the color for the next annotation
    SetColor(ShapeColor),
    /// Commit pending text input
    CommitText(String),
    /// Discard pending text input
    CancelText,
    /// Undo last committed annotation
    Undo,
    /// Redo undone annotation
    Redo,
    /// Remove all committed annotations
    Clear,
}

// ============================================================================
// Phase Control Types
// ============================================================================

/// Phase-level control messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseMsg {
    /// Accept the pending crop selection and enter the annotate phase
    ConfirmSelection,
    /// Discard the pending crop selection and drag again
    RetrySelection,
    /// Flatten the canvas and finish the session
    Finish,
    /// Abort the session without producing anything
    Cancel,
}

/// All events a host can feed into a session
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Edit(EditMsg),
    Phase(PhaseMsg),
}

impl Msg {
    // Pointer shortcuts
    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Down(x, y))
    }
    pub fn pointer_move(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Move(x, y))
    }
    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Up(x, y))
    }
    pub fn pointer_leave() -> Self {
        Self::Pointer(PointerMsg::Leave)
    }

    // Editing shortcuts
    pub fn set_tool(tool: Tool) -> Self {
        Self::Edit(EditMsg::SetTool(tool))
    }
    pub fn set_color(color: ShapeColor) -> Self {
        Self::Edit(EditMsg::SetColor(color))
    }
    pub fn commit_text(text: impl Into<String>) -> Self {
        Self::Edit(EditMsg::CommitText(text.into()))
    }
    pub fn cancel_text() -> Self {
        Self::Edit(EditMsg::CancelText)
    }
    pub fn undo() -> Self {
        Self::Edit(EditMsg::Undo)
    }
    pub fn redo() -> Self {
        Self::Edit(EditMsg::Redo)
    }
    pub fn clear() -> Self {
        Self::Edit(EditMsg::Clear)
    }

    // Phase shortcuts
    pub fn confirm_selection() -> Self {
        Self::Phase(PhaseMsg::ConfirmSelection)
    }
    pub fn retry_selection() -> Self {
        Self::Phase(PhaseMsg::RetrySelection)
    }
    pub fn finish() -> Self {
        Self::Phase(PhaseMsg::Finish)
    }
    pub fn cancel() -> Self {
        Self::Phase(PhaseMsg::Cancel)
    }
}
