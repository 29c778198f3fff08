//! Annotation log and editing state machine
//!
//! This module provides:
//! - The ordered annotation log with undo/redo history (log.rs)
//! - The pointer-driven editor that feeds it (editor.rs)

pub mod editor;
pub mod log;

pub use editor::Annotator;
pub use self::log::AnnotationLog;
