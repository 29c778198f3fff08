//! Ordered annotation log with undo history

use crate::domain::Annotation;

/// Committed annotations in creation order, plus at most one in-progress
/// annotation that is not part of history until committed.
///
/// `entries[..cursor]` are the live annotations; entries past the cursor are
/// undone and stay available for redo until a new annotation truncates them.
#[derive(Clone, Debug, Default)]
pub struct AnnotationLog {
    entries: Vec<Annotation>,
    cursor: usize,
    current: Option<Annotation>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the committed annotations in the order they were created
    pub fn committed(&self) -> &[Annotation] {
        &self.entries[..self.cursor]
    }

    /// Get the in-progress annotation, if any
    pub fn current(&self) -> Option<&Annotation> {
        self.current.as_ref()
    }

    /// Number of committed annotations
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Check if there are no committed annotations
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Check if an undone annotation is available for redo
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Start an in-progress annotation, replacing any previous one
    pub fn begin(&mut self, annotation: Annotation) {
        self.current = Some(annotation);
    }

    /// Mutate the in-progress annotation in place; no-op when none exists
    pub fn update(&mut self, f: impl FnOnce(&mut Annotation)) {
        if let Some(annotation) = self.current.as_mut() {
            f(annotation);
        }
    }

    /// Move the in-progress annotation into the committed log.
    /// Returns false when there was nothing to commit.
    pub fn commit(&mut self) -> bool {
        match self.current.take() {
            Some(annotation) => {
                self.add(annotation);
                true
            }
            None => false,
        }
    }

    /// Drop the in-progress annotation without committing it
    pub fn discard(&mut self) {
        self.current = None;
    }

    /// Append a committed annotation, truncating any redo history
    pub fn add(&mut self, annotation: Annotation) {
        self.entries.truncate(self.cursor);
        self.entries.push(annotation);
        self.cursor = self.entries.len();
    }

    /// Remove the most recent committed annotation; no-op on an empty log.
    /// The in-progress annotation is never touched.
    pub fn undo(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Restore the most recently undone annotation, if any
    pub fn redo(&mut self) {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Remove all committed annotations
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
