//! The event-driven engine abstraction shared by all strategies.

use super::event::SearchEvent;
use super::result::SearchResult;

/// A search strategy expressed as a resumable state machine.
///
/// Each call to [`next_event`](SearchEngine::next_event) advances the
/// search until the next observable event. The stream always ends with
/// [`SearchEvent::End`], after which `next_event` returns `None`.
///
/// Engines are single-threaded; run several engines on separate threads
/// for concurrency (see [`BatchRunner`](crate::driver::BatchRunner)).
pub trait SearchEngine {
    /// Advances the search to its next event.
    fn next_event(&mut self) -> Option<SearchEvent>;

    /// Runs the search to completion, discarding any remaining events,
    /// and returns the result.
    fn finish(&mut self) -> SearchResult;
}

impl<E: SearchEngine + ?Sized> SearchEngine for Box<E> {
    fn next_event(&mut self) -> Option<SearchEvent> {
        (**self).next_event()
    }

    fn finish(&mut self) -> SearchResult {
        (**self).finish()
    }
}

/// Iterator adapter over a [`SearchEngine`]'s event stream.
///
/// # Examples
///
/// ```
/// use u_nqueens::backtrack::{BacktrackConfig, BacktrackSearch};
/// use u_nqueens::search::{Events, SearchEvent};
///
/// let search = BacktrackSearch::new(4, &BacktrackConfig::default(), None).unwrap();
/// let found = Events::new(search)
///     .filter(|e| matches!(e, SearchEvent::Found(_)))
///     .count();
/// assert_eq!(found, 2);
/// ```
pub struct Events<E> {
    engine: E,
}

impl<E: SearchEngine> Events<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Finishes the search and returns its result.
    pub fn into_result(mut self) -> SearchResult {
        self.engine.finish()
    }
}

impl<E: SearchEngine> Iterator for Events<E> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        self.engine.next_event()
    }
}
