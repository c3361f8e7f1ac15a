//! Search outcomes and the per-run bookkeeping shared by all engines.

use crate::board::{Board, ScoredBoard};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Terminal state of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A zero-conflict board. For backtracking this is the first solution
    /// enumerated; all of them are in [`SearchResult::solutions`].
    Found(Board),
    /// The strategy's budget (steps, restarts, expansions, generations or
    /// time) was consumed without reaching zero conflicts.
    Exhausted,
    /// The caller's cancellation flag was observed.
    Cancelled,
}

/// A solution together with the time at which it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub board: Board,
    /// Time since the run started.
    pub found_at: Duration,
}

/// Result of a single search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// How the run ended.
    pub outcome: SearchOutcome,

    /// Wall-clock time of the run.
    pub elapsed: Duration,

    /// Strategy-specific step count: column trials for backtracking,
    /// neighbourhood evaluations for hill climbing, expansions for
    /// best-first, generations for the cultural algorithm.
    pub steps: usize,

    /// Every solution found, in discovery order.
    pub solutions: Vec<Solution>,

    /// Lowest-conflict board seen (local search strategies).
    pub best: Option<ScoredBoard>,

    /// Whether the run stopped because its time limit elapsed.
    pub timed_out: bool,
}

impl SearchResult {
    /// Returns the found board, if any.
    pub fn board(&self) -> Option<&Board> {
        match &self.outcome {
            SearchOutcome::Found(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Exhausted)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Cancelled)
    }
}

/// Per-run state: clock, budget checks, counters and collected solutions.
#[derive(Debug)]
pub(crate) struct Tracker {
    start: Instant,
    time_limit: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
    steps: usize,
    solutions: Vec<Solution>,
    best: Option<ScoredBoard>,
    outcome: Option<SearchOutcome>,
    finished_after: Option<Duration>,
    timed_out: bool,
}

impl Tracker {
    pub(crate) fn new(cancel: Option<Arc<AtomicBool>>, time_limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            cancel,
            steps: 0,
            solutions: Vec::new(),
            best: None,
            outcome: None,
            finished_after: None,
            timed_out: false,
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Checkpoint: cancellation first, then the time limit. A run that
    /// times out after recording a solution still ends as `Found`.
    pub(crate) fn interruption(&mut self) -> Option<SearchOutcome> {
        if self.is_cancelled() {
            return Some(SearchOutcome::Cancelled);
        }
        if let Some(limit) = self.time_limit {
            if self.start.elapsed() >= limit {
                self.timed_out = true;
                return Some(match self.first_solution() {
                    Some(board) => SearchOutcome::Found(board.clone()),
                    None => SearchOutcome::Exhausted,
                });
            }
        }
        None
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.finished_after.unwrap_or_else(|| self.start.elapsed())
    }

    pub(crate) fn step(&mut self) {
        self.steps += 1;
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    pub(crate) fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Keeps `candidate` if it strictly improves on the best seen so far.
    pub(crate) fn offer(&mut self, candidate: &ScoredBoard) {
        let improved = self
            .best
            .as_ref()
            .is_none_or(|best| candidate.conflicts < best.conflicts);
        if improved {
            self.best = Some(candidate.clone());
        }
    }

    pub(crate) fn record_solution(&mut self, board: Board) {
        let found_at = self.start.elapsed();
        self.offer(&ScoredBoard {
            board: board.clone(),
            conflicts: 0,
        });
        self.solutions.push(Solution { board, found_at });
    }

    pub(crate) fn first_solution(&self) -> Option<&Board> {
        self.solutions.first().map(|s| &s.board)
    }

    pub(crate) fn finish(&mut self, outcome: SearchOutcome) {
        if self.outcome.is_none() {
            self.finished_after = Some(self.start.elapsed());
            self.outcome = Some(outcome);
        }
    }

    /// Moves the collected result out. Only meaningful once finished.
    pub(crate) fn take_result(&mut self) -> SearchResult {
        SearchResult {
            outcome: self.outcome.clone().unwrap_or(SearchOutcome::Exhausted),
            elapsed: self.elapsed(),
            steps: self.steps,
            solutions: std::mem::take(&mut self.solutions),
            best: self.best.clone(),
            timed_out: self.timed_out,
        }
    }
}
