//! Selection and phase types for the capture flow

/// Phase of a screenshot session
///
/// The transition is one-way: once a crop is confirmed the session never
/// returns to region selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Selecting the region to keep
    Crop,
    /// Drawing annotations on the cropped bitmap
    Annotate,
}

/// Interaction state of the region selector
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No drag in progress
    #[default]
    Idle,
    /// Pointer held down, selection rectangle tracking the drag
    Dragging,
    /// Drag released over a large enough region, awaiting confirm or retry
    Confirming,
}
