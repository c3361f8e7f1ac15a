//! Hill-climbing state machine and runner.

use super::config::HillClimbConfig;
use crate::board::{conflicts, neighbors, Board, ScoredBoard};
use crate::search::{
    create_rng, validate_size, SearchEngine, SearchError, SearchEvent, SearchOutcome,
    SearchResult, Tracker,
};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Where the climber currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbPhase {
    /// About to draw a fresh random board.
    Restart,
    /// Last move strictly improved the conflict count.
    Climbing,
    /// Last move kept the conflict count (plateau crossing).
    Sideways,
    /// No admissible move; the current restart is abandoned.
    Stuck,
    /// A zero-conflict board was reached.
    Solved,
    /// Restarts exhausted, or the run was interrupted.
    Exhausted,
}

/// Random-restart hill climbing as a resumable state machine.
///
/// Every step is one full neighbourhood evaluation. Ties among the best
/// neighbours are broken uniformly at random.
#[derive(Debug)]
pub struct HillClimbSearch {
    n: usize,
    config: HillClimbConfig,
    rng: StdRng,
    phase: ClimbPhase,
    current: Option<ScoredBoard>,
    restarts: usize,
    steps_this_restart: usize,
    sideways: usize,
    pending: VecDeque<SearchEvent>,
    done: bool,
    tracker: Tracker,
}

impl HillClimbSearch {
    /// Prepares a search over an `n x n` board.
    pub fn new(
        n: usize,
        config: &HillClimbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Self, SearchError> {
        validate_size(n)?;
        config.validate()?;

        info!(
            event = "search_start",
            strategy = "hill_climbing",
            n,
            max_restarts = config.max_restarts,
            max_steps_per_restart = config.max_steps_per_restart,
            max_sideways = config.max_sideways,
        );

        Ok(Self {
            n,
            config: config.clone(),
            rng: create_rng(config.seed),
            phase: ClimbPhase::Restart,
            current: None,
            restarts: 0,
            steps_this_restart: 0,
            sideways: 0,
            pending: VecDeque::new(),
            done: false,
            tracker: Tracker::new(cancel, config.time_limit_ms.map(Duration::from_millis)),
        })
    }

    pub fn phase(&self) -> ClimbPhase {
        self.phase
    }

    /// Restarts begun so far (including the current one).
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Evaluates the whole neighbourhood and returns the best conflict
    /// count with every board achieving it.
    fn best_moves(board: &Board) -> (usize, Vec<Board>) {
        let mut best = usize::MAX;
        let mut candidates = Vec::new();
        for neighbor in neighbors(board) {
            let c = conflicts(&neighbor);
            if c < best {
                best = c;
                candidates.clear();
                candidates.push(neighbor);
            } else if c == best {
                candidates.push(neighbor);
            }
        }
        (best, candidates)
    }

    fn end(&mut self, outcome: SearchOutcome) -> SearchEvent {
        self.phase = match outcome {
            SearchOutcome::Found(_) => ClimbPhase::Solved,
            _ => ClimbPhase::Exhausted,
        };
        self.tracker.finish(outcome);
        self.done = true;
        info!(
            event = "search_end",
            strategy = "hill_climbing",
            n = self.n,
            restarts = self.restarts,
            steps = self.tracker.steps(),
            solved = self.phase == ClimbPhase::Solved,
            duration_ms = self.tracker.elapsed().as_millis() as u64,
        );
        SearchEvent::End
    }

    fn begin_restart(&mut self) -> SearchEvent {
        self.restarts += 1;
        self.steps_this_restart = 0;
        self.sideways = 0;

        let scored = ScoredBoard::new(Board::random(self.n, &mut self.rng));
        self.tracker.offer(&scored);
        let event = SearchEvent::SetBoard(scored.board.clone());
        self.current = Some(scored);
        self.phase = ClimbPhase::Climbing;
        event
    }

    /// One neighbourhood evaluation. Returns `None` when the climber is
    /// stuck.
    fn climb(&mut self, current: &ScoredBoard) -> Option<ScoredBoard> {
        self.steps_this_restart += 1;
        self.tracker.step();

        let (best, mut candidates) = Self::best_moves(&current.board);
        let phase = if best < current.conflicts {
            self.sideways = 0;
            ClimbPhase::Climbing
        } else if best == current.conflicts && self.sideways < self.config.max_sideways {
            self.sideways += 1;
            ClimbPhase::Sideways
        } else {
            return None;
        };

        if candidates.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..candidates.len());
        self.phase = phase;
        Some(ScoredBoard {
            board: candidates.swap_remove(pick),
            conflicts: best,
        })
    }
}

impl SearchEngine for HillClimbSearch {
    fn next_event(&mut self) -> Option<SearchEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if self.done {
            return None;
        }

        loop {
            if let Some(outcome) = self.tracker.interruption() {
                return Some(self.end(outcome));
            }

            match self.phase {
                ClimbPhase::Restart => {
                    if self.restarts >= self.config.max_restarts {
                        return Some(self.end(SearchOutcome::Exhausted));
                    }
                    return Some(self.begin_restart());
                }
                ClimbPhase::Climbing | ClimbPhase::Sideways => {
                    let Some(current) = self.current.take() else {
                        self.phase = ClimbPhase::Restart;
                        continue;
                    };

                    if current.conflicts == 0 {
                        let board = current.board.clone();
                        self.tracker.record_solution(board.clone());
                        self.current = Some(current);
                        let end = self.end(SearchOutcome::Found(board.clone()));
                        self.pending.push_back(end);
                        return Some(SearchEvent::Found(board));
                    }

                    if self.steps_this_restart >= self.config.max_steps_per_restart {
                        self.current = Some(current);
                        self.phase = ClimbPhase::Stuck;
                        continue;
                    }

                    match self.climb(&current) {
                        Some(next) => {
                            self.tracker.offer(&next);
                            let event = SearchEvent::SetBoard(next.board.clone());
                            self.current = Some(next);
                            return Some(event);
                        }
                        None => {
                            self.current = Some(current);
                            self.phase = ClimbPhase::Stuck;
                        }
                    }
                }
                ClimbPhase::Stuck => {
                    debug!(
                        restart = self.restarts,
                        steps = self.steps_this_restart,
                        conflicts = self.current.as_ref().map(|c| c.conflicts),
                        "restart abandoned"
                    );
                    self.phase = ClimbPhase::Restart;
                    return Some(SearchEvent::Info(format!("restart:{}", self.restarts)));
                }
                ClimbPhase::Solved | ClimbPhase::Exhausted => return None,
            }
        }
    }

    fn finish(&mut self) -> SearchResult {
        while self.next_event().is_some() {}
        self.tracker.take_result()
    }
}

/// Runs hill climbing to completion.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Searches for a solution of an `n x n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::hill::{HillClimbConfig, HillClimbRunner};
    ///
    /// let config = HillClimbConfig::default().with_seed(42);
    /// let result = HillClimbRunner::run(8, &config).unwrap();
    /// assert!(result.is_solved());
    /// ```
    pub fn run(n: usize, config: &HillClimbConfig) -> Result<SearchResult, SearchError> {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs hill climbing with an optional cancellation flag.
    pub fn run_with_cancel(
        n: usize,
        config: &HillClimbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        let mut search = HillClimbSearch::new(n, config, cancel)?;
        Ok(search.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Events;

    #[test]
    fn test_solves_eight_queens() {
        let config = HillClimbConfig::default().with_seed(42);
        let result = HillClimbRunner::run(8, &config).unwrap();
        assert!(result.is_solved());
        assert_eq!(result.board().unwrap().conflicts(), 0);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.best.as_ref().unwrap().conflicts, 0);
    }

    #[test]
    fn test_solves_small_boards() {
        for n in 4..=10 {
            let config = HillClimbConfig::default().with_seed(n as u64);
            let result = HillClimbRunner::run(n, &config).unwrap();
            assert!(result.is_solved(), "n={n} not solved");
        }
    }

    #[test]
    fn test_step_budget_respected() {
        for seed in 0..20 {
            let config = HillClimbConfig::default()
                .with_max_restarts(3)
                .with_max_steps_per_restart(4)
                .with_seed(seed);
            let result = HillClimbRunner::run(16, &config).unwrap();
            assert!(result.steps <= config.step_budget());
            assert!(result.is_solved() || result.is_exhausted());
        }
    }

    #[test]
    fn test_restart_budget_respected() {
        let config = HillClimbConfig::default()
            .with_max_restarts(2)
            .with_max_steps_per_restart(1)
            .with_max_sideways(0)
            .with_seed(5);
        let mut search = HillClimbSearch::new(20, &config, None).unwrap();
        let result = search.finish();
        assert!(search.restarts() <= 2);
        assert!(result.steps <= 2);
        if result.is_exhausted() {
            assert_eq!(search.phase(), ClimbPhase::Exhausted);
            assert!(result.best.is_some());
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = HillClimbConfig::default().with_seed(1234);
        let a = HillClimbRunner::run(10, &config).unwrap();
        let b = HillClimbRunner::run(10, &config).unwrap();
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn test_event_stream() {
        let config = HillClimbConfig::default().with_seed(7);
        let search = HillClimbSearch::new(8, &config, None).unwrap();
        let events: Vec<SearchEvent> = Events::new(search).collect();

        assert!(matches!(events.first(), Some(SearchEvent::SetBoard(_))));
        assert_eq!(events.last(), Some(&SearchEvent::End));
        let found: Vec<&SearchEvent> = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Found(_)))
            .collect();
        assert_eq!(found.len(), 1);
        assert!(events.iter().all(|e| !matches!(e, SearchEvent::Place { .. })));
    }

    #[test]
    fn test_restart_info_events() {
        let config = HillClimbConfig::default()
            .with_max_restarts(3)
            .with_max_steps_per_restart(1)
            .with_max_sideways(0)
            .with_seed(11);
        let search = HillClimbSearch::new(30, &config, None).unwrap();
        let infos: Vec<String> = Events::new(search)
            .filter_map(|e| match e {
                SearchEvent::Info(text) => Some(text),
                _ => None,
            })
            .collect();
        assert!(infos.len() <= 3);
        for (i, text) in infos.iter().enumerate() {
            assert_eq!(text, &format!("restart:{}", i + 1));
        }
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            HillClimbRunner::run_with_cancel(8, &HillClimbConfig::default(), Some(cancel))
                .unwrap();
        assert!(result.is_cancelled());
        assert_eq!(result.steps, 0);
        assert!(result.solutions.is_empty());
    }

    #[test]
    fn test_time_limit() {
        let config = HillClimbConfig::default()
            .with_max_restarts(1_000)
            .with_max_steps_per_restart(1_000)
            .with_time_limit_ms(1)
            .with_seed(3);
        let result = HillClimbRunner::run(64, &config).unwrap();
        assert!(result.is_exhausted());
        assert!(result.timed_out);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            HillClimbRunner::run(2, &HillClimbConfig::default()),
            Err(SearchError::InvalidSize { n: 2 })
        ));
        assert!(matches!(
            HillClimbRunner::run(8, &HillClimbConfig::default().with_max_restarts(0)),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
