//! Single-run entry points that dispatch on [`Strategy`].

use super::config::{SearchConfig, Strategy};
use crate::backtrack::BacktrackSearch;
use crate::best_first::BestFirstSearch;
use crate::cultural::CulturalSearch;
use crate::hill::HillClimbSearch;
use crate::search::{SearchEngine, SearchError, SearchResult};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Runs `strategy` on an `n x n` board to completion.
///
/// # Examples
///
/// ```
/// use u_nqueens::driver::{run, SearchConfig, Strategy};
///
/// let result = run(Strategy::Backtracking, 4, &SearchConfig::default()).unwrap();
/// assert!(result.is_solved());
/// assert_eq!(result.board().unwrap().conflicts(), 0);
/// ```
pub fn run(strategy: Strategy, n: usize, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    run_with_cancel(strategy, n, config, None)
}

/// Runs `strategy` with an optional cancellation flag polled at every
/// checkpoint.
pub fn run_with_cancel(
    strategy: Strategy,
    n: usize,
    config: &SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SearchResult, SearchError> {
    let mut engine = start(strategy, n, config, cancel)?;
    Ok(engine.finish())
}

/// Builds the engine for `strategy` without advancing it, for callers that
/// consume the event stream one event at a time.
///
/// ```
/// use u_nqueens::driver::{start, SearchConfig, Strategy};
/// use u_nqueens::search::{Events, SearchEvent};
///
/// let engine = start(Strategy::HillClimbing, 6, &SearchConfig::default().with_seed(1), None)
///     .unwrap();
/// let last = Events::new(engine).last();
/// assert_eq!(last, Some(SearchEvent::End));
/// ```
pub fn start(
    strategy: Strategy,
    n: usize,
    config: &SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Box<dyn SearchEngine + Send>, SearchError> {
    config.validate()?;
    let engine: Box<dyn SearchEngine + Send> = match strategy {
        Strategy::Backtracking => Box::new(BacktrackSearch::new(
            n,
            &config.to_backtrack_config(),
            cancel,
        )?),
        Strategy::HillClimbing => Box::new(HillClimbSearch::new(
            n,
            &config.to_hill_climb_config(),
            cancel,
        )?),
        Strategy::BestFirst => Box::new(BestFirstSearch::new(
            n,
            &config.to_best_first_config(),
            cancel,
        )?),
        Strategy::Cultural => Box::new(CulturalSearch::new(
            n,
            &config.to_cultural_config(),
            cancel,
        )?),
    };
    Ok(engine)
}
