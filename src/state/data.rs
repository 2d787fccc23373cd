/// Shared data structures for the application state
///
/// These types flow between the controller and the UI layer.

use crate::gemini::GeneratedImage;

/// Which of the two upload cards a selection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The full-body photo ("first image")
    Person,
    /// The clothing item ("second image")
    Clothing,
}

/// Outcome of one try-on invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnResult {
    Success(GeneratedImage),
    /// Human-readable message
    Failure(String),
}

/// Where the state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing (or only one photo) selected, no result to show
    Idle,
    /// Both photos selected, no result to show
    Ready,
    InFlight,
    Success,
    Failure,
}

/// What the result panel should show, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Loading,
    Error(&'a str),
    Image(&'a GeneratedImage),
    Placeholder,
}
