//! Progress events for animated visualisation.

use crate::board::Board;

/// A single progress event emitted by a search engine.
///
/// Consumers advance one event per scheduling tick. Every stream is
/// terminated by exactly one [`SearchEvent::End`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A queen was placed (backtracking only).
    Place { row: usize, col: usize },
    /// A queen was removed while backtracking.
    Remove { row: usize, col: usize },
    /// The whole board changed (local search strategies).
    SetBoard(Board),
    /// A zero-conflict board was reached.
    Found(Board),
    /// Free-form progress text, e.g. `restart:3` or `gen:12 best:2`.
    Info(String),
    /// The stream is finished.
    End,
}

impl SearchEvent {
    /// Returns `true` for the terminating event.
    pub fn is_end(&self) -> bool {
        matches!(self, SearchEvent::End)
    }
}
