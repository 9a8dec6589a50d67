/// Lifecycle of a quiz session.
///
/// Indices are zero-based positions in the question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    /// Question `i` is shown and accepts one answer.
    Presenting(usize),
    /// Question `i` has been answered or timed out; feedback is visible.
    Awaiting(usize),
    Finished,
    Cancelled,
}

impl SessionState {
    /// `Finished` and `Cancelled` accept no further input.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }

    /// Index of the question in play, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Presenting(i) | Self::Awaiting(i) => Some(i),
            Self::NotStarted | Self::Finished | Self::Cancelled => None,
        }
    }
}
