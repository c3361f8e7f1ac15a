//! Shared search vocabulary: events, outcomes, errors and the engine trait.
//!
//! Every strategy module builds a [`SearchEngine`] that emits
//! [`SearchEvent`]s lazily and ends in a [`SearchResult`]. Rejected inputs
//! surface as [`SearchError`] before any search state is created.

mod engine;
mod error;
mod event;
mod random;
mod result;

pub use engine::{Events, SearchEngine};
pub use error::{validate_size, SearchError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use event::SearchEvent;
pub use random::create_rng;
pub use result::{SearchOutcome, SearchResult, Solution};

pub(crate) use result::Tracker;
