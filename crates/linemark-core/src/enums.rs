//! Classifier state enum.
//!
//! The line classifier is a two-state machine: it is either idle or
//! accumulating a pending list group.

use serde::{Deserialize, Serialize};

/// State of the line classifier.
///
/// The classifier starts in [`ClassifierState::Idle`], moves to
/// [`ClassifierState::Accumulating`] on the first list-marker line, stays
/// there across further list lines, and returns to `Idle` when the pending
/// list is flushed (blank line, non-list line, or end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassifierState {
    /// No pending list group
    Idle,
    /// Pending list group is non-empty
    Accumulating,
}

impl std::fmt::Display for ClassifierState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierState::Idle => write!(f, "idle"),
            ClassifierState::Accumulating => write!(f, "accumulating"),
        }
    }
}
