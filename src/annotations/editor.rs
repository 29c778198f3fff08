//! Pointer-driven annotation editing state machine

use crate::config::{EditorConfig, ShapeColor};
use crate::domain::{Annotation, Point, Tool};

use super::log::AnnotationLog;

/// Interaction state between pointer events
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer held down, the in-progress annotation tracks the drag
    Drawing,
    /// Text anchor placed, waiting for the host's input field
    TextPending { anchor: Point },
}

/// Drives tool selection and pointer sequences into the annotation log.
///
/// All operations are synchronous and tolerate out-of-order events: a move
/// without a press, a release without a drag, and an undo mid-gesture are
/// all safe.
#[derive(Clone, Debug, Default)]
pub struct Annotator {
    log: AnnotationLog,
    state: EditorState,
    tool: Tool,
    color: ShapeColor,
}

impl Annotator {
    /// Create an annotator seeded with the configured tool and color
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            log: AnnotationLog::new(),
            state: EditorState::Idle,
            tool: config.tool,
            color: config.color,
        }
    }

    /// Get the annotation log
    pub fn log(&self) -> &AnnotationLog {
        &self.log
    }

    /// Get the active tool
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Get the active color
    pub fn color(&self) -> ShapeColor {
        self.color
    }

    /// Select the tool for the next annotation. In-progress and committed
    /// annotations keep the tool they were created with.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Select the color for the next annotation
    pub fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }

    /// Check if a drag gesture is in progress
    pub fn is_drawing(&self) -> bool {
        self.state == EditorState::Drawing
    }

    /// Get the pending text anchor, if the editor is waiting for text input
    pub fn pending_text_anchor(&self) -> Option<Point> {
        match self.state {
            EditorState::TextPending { anchor } => Some(anchor),
            _ => None,
        }
    }

    /// Handle a pointer press at `pos` in canvas pixel space
    pub fn pointer_down(&mut self, pos: Point) {
        if self.state != EditorState::Idle {
            return;
        }
        match self.tool {
            Tool::Text => {
                self.state = EditorState::TextPending { anchor: pos };
            }
            tool => {
                self.log.begin(Annotation::shape(tool, self.color, pos));
                self.state = EditorState::Drawing;
            }
        }
    }

    /// Handle pointer motion at `pos` in canvas pixel space
    pub fn pointer_move(&mut self, pos: Point) {
        if self.state != EditorState::Drawing {
            return;
        }
        self.log.update(|annotation| match annotation.tool {
            Tool::Freehand => annotation.push_point(pos),
            Tool::Rectangle | Tool::Arrow => annotation.set_endpoint(pos),
            Tool::Text => {}
        });
    }

    /// Handle a pointer release, committing the in-progress annotation
    pub fn pointer_up(&mut self) {
        if self.state == EditorState::Drawing {
            self.log.commit();
            self.state = EditorState::Idle;
        }
    }

    /// Handle the pointer leaving the canvas; commits like a release so no
    /// gesture is left dangling
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Commit pending text input. Whitespace-only input discards the
    /// annotation; otherwise the trimmed text is appended to the log.
    pub fn commit_text(&mut self, input: &str) {
        let EditorState::TextPending { anchor } = self.state else {
            return;
        };
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            self.log
                .add(Annotation::text(self.color, anchor, trimmed.to_string()));
        }
        self.state = EditorState::Idle;
    }

    /// Discard pending text input without committing anything
    pub fn cancel_text(&mut self) {
        if matches!(self.state, EditorState::TextPending { .. }) {
            self.state = EditorState::Idle;
        }
    }

    /// Undo the most recent committed annotation. Safe mid-gesture: the
    /// in-progress annotation is untouched.
    pub fn undo(&mut self) {
        self.log.undo();
    }

    /// Redo the most recently undone annotation
    pub fn redo(&mut self) {
        self.log.redo();
    }

    /// Remove all committed annotations
    pub fn clear(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator() -> Annotator {
        Annotator::new(&EditorConfig::default())
    }

    #[test]
    fn test_drag_commits_rectangle_on_release() {
        let mut editor = annotator();
        editor.set_tool(Tool::Rectangle);
        editor.pointer_down(Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(60.0, 40.0));
        editor.pointer_move(Point::new(110.0, 60.0));
        editor.pointer_up();

        let committed = editor.log().committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(
            committed[0].points,
            vec![Point::new(10.0, 10.0), Point::new(110.0, 60.0)]
        );
        assert!(editor.log().current().is_none());
    }

    #[test]
    fn test_freehand_keeps_every_motion_point() {
        let mut editor = annotator();
        editor.set_tool(Tool::Freehand);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(5.0, 5.0));
        editor.pointer_move(Point::new(5.0, 10.0));
        editor.pointer_move(Point::new(0.0, 10.0));
        editor.pointer_up();

        let committed = editor.log().committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(
            committed[0].points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(5.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_pointer_leave_commits_like_release() {
        let mut editor = annotator();
        editor.set_tool(Tool::Arrow);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(50.0, 50.0));
        editor.pointer_leave();
        assert_eq!(editor.log().committed().len(), 1);
        assert!(!editor.is_drawing());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut editor = annotator();
        editor.pointer_move(Point::new(5.0, 5.0));
        editor.pointer_up();
        assert!(editor.log().is_empty());
    }

    #[test]
    fn test_text_commit_trims_and_appends() {
        let mut editor = annotator();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(50.0, 50.0));
        assert_eq!(editor.pending_text_anchor(), Some(Point::new(50.0, 50.0)));
        editor.commit_text("  Bug here \n");

        let committed = editor.log().committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].text.as_deref(), Some("Bug here"));
        assert_eq!(committed[0].points, vec![Point::new(50.0, 50.0)]);
        assert!(editor.pending_text_anchor().is_none());
    }

    #[test]
    fn test_empty_text_commit_adds_nothing() {
        let mut editor = annotator();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(50.0, 50.0));
        editor.commit_text("   ");
        assert!(editor.log().is_empty());
        assert!(editor.pending_text_anchor().is_none());
    }

    #[test]
    fn test_cancel_text_discards_anchor() {
        let mut editor = annotator();
        editor.set_tool(Tool::Text);
        editor.pointer_down(Point::new(50.0, 50.0));
        editor.cancel_text();
        assert!(editor.pending_text_anchor().is_none());
        assert!(editor.log().is_empty());
    }

    #[test]
    fn test_tool_change_does_not_affect_in_progress_annotation() {
        let mut editor = annotator();
        editor.set_tool(Tool::Arrow);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.set_tool(Tool::Freehand);
        editor.set_color(ShapeColor::from_rgb8(0, 255, 0));
        editor.pointer_move(Point::new(20.0, 20.0));
        editor.pointer_up();

        let committed = editor.log().committed();
        assert_eq!(committed[0].tool, Tool::Arrow);
        assert_eq!(committed[0].color, EditorConfig::default().color);
        // Next annotation picks up the new tool and color
        editor.pointer_down(Point::new(1.0, 1.0));
        editor.pointer_move(Point::new(2.0, 2.0));
        editor.pointer_up();
        assert_eq!(editor.log().committed()[1].tool, Tool::Freehand);
    }

    #[test]
    fn test_undo_mid_drag_leaves_gesture_intact() {
        let mut editor = annotator();
        editor.set_tool(Tool::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(10.0, 10.0));
        editor.pointer_up();

        editor.pointer_down(Point::new(20.0, 20.0));
        editor.pointer_move(Point::new(30.0, 30.0));
        editor.undo();
        assert!(editor.log().is_empty());
        assert!(editor.is_drawing());
        editor.pointer_up();
        assert_eq!(editor.log().committed().len(), 1);
        assert_eq!(editor.log().committed()[0].points[0], Point::new(20.0, 20.0));
    }

    #[test]
    fn test_undo_on_empty_editor_is_noop() {
        let mut editor = annotator();
        editor.undo();
        editor.clear();
        assert!(editor.log().is_empty());
    }
}
