//! Backtracking state machine and runner.

use super::config::BacktrackConfig;
use crate::board::Board;
use crate::search::{SearchEngine, SearchError, SearchEvent, SearchOutcome, SearchResult, Tracker};
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Depth-first placement, one queen per row, as a resumable state machine.
///
/// The stack holds the column chosen for each placed row; `cursor` is the
/// next column to try in the current row. Cancellation is checked before
/// every column trial and every descent.
#[derive(Debug)]
pub struct BacktrackSearch {
    n: usize,
    placed: Vec<usize>,
    cursor: usize,
    base_row: usize,
    col_used: Vec<bool>,
    diag_used: Vec<bool>,
    anti_used: Vec<bool>,
    at_solution: bool,
    max_solutions: Option<usize>,
    pending: VecDeque<SearchEvent>,
    done: bool,
    tracker: Tracker,
}

impl BacktrackSearch {
    /// Prepares a search over an `n x n` board.
    pub fn new(
        n: usize,
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Self, SearchError> {
        config.validate(n)?;

        let mut search = Self {
            n,
            placed: Vec::with_capacity(n),
            cursor: 0,
            base_row: 0,
            col_used: vec![false; n],
            diag_used: vec![false; 2 * n - 1],
            anti_used: vec![false; 2 * n - 1],
            at_solution: false,
            max_solutions: config.max_solutions,
            pending: VecDeque::new(),
            done: false,
            tracker: Tracker::new(cancel, config.time_limit_ms.map(Duration::from_millis)),
        };

        if let Some(col) = config.start_column {
            search.occupy(0, col, true);
            search.placed.push(col);
            search.base_row = 1;
            search.pending.push_back(SearchEvent::Place { row: 0, col });
        }

        info!(
            event = "search_start",
            strategy = "backtracking",
            n,
            start_column = ?config.start_column,
        );
        Ok(search)
    }

    /// Number of solutions found so far.
    pub fn solutions_found(&self) -> usize {
        self.tracker.solution_count()
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        !self.col_used[col]
            && !self.diag_used[row + self.n - 1 - col]
            && !self.anti_used[row + col]
    }

    fn occupy(&mut self, row: usize, col: usize, used: bool) {
        self.col_used[col] = used;
        self.diag_used[row + self.n - 1 - col] = used;
        self.anti_used[row + col] = used;
    }

    /// Column-major view of the complete row placement.
    fn current_board(&self) -> Board {
        let mut rows = vec![0; self.n];
        for (row, &col) in self.placed.iter().enumerate() {
            rows[col] = row;
        }
        Board::from_rows_unchecked(rows)
    }

    /// Undoes the deepest placement and resumes after its column.
    fn retreat(&mut self) -> SearchEvent {
        match self.placed.pop() {
            Some(col) => {
                let row = self.placed.len();
                self.occupy(row, col, false);
                self.cursor = col + 1;
                SearchEvent::Remove { row, col }
            }
            None => self.end(SearchOutcome::Exhausted),
        }
    }

    fn end(&mut self, outcome: SearchOutcome) -> SearchEvent {
        self.tracker.finish(outcome);
        self.done = true;
        info!(
            event = "search_end",
            strategy = "backtracking",
            n = self.n,
            steps = self.tracker.steps(),
            solutions = self.tracker.solution_count(),
            duration_ms = self.tracker.elapsed().as_millis() as u64,
        );
        SearchEvent::End
    }
}

impl SearchEngine for BacktrackSearch {
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

            let row = self.placed.len();

            if row == self.n {
                if self.at_solution {
                    self.at_solution = false;
                    return Some(self.retreat());
                }
                self.at_solution = true;
                let board = self.current_board();
                self.tracker.record_solution(board.clone());
                debug!(solution = self.tracker.solution_count(), "solution found");

                if self
                    .max_solutions
                    .is_some_and(|max| self.tracker.solution_count() >= max)
                {
                    let end = self.end(SearchOutcome::Found(board.clone()));
                    self.pending.push_back(end);
                }
                return Some(SearchEvent::Found(board));
            }

            if self.cursor < self.n {
                let col = self.cursor;
                self.cursor += 1;
                self.tracker.step();
                if self.is_safe(row, col) {
                    self.occupy(row, col, true);
                    self.placed.push(col);
                    self.cursor = 0;
                    return Some(SearchEvent::Place { row, col });
                }
                continue;
            }

            if row == self.base_row {
                let outcome = match self.tracker.first_solution() {
                    Some(board) => SearchOutcome::Found(board.clone()),
                    None => SearchOutcome::Exhausted,
                };
                return Some(self.end(outcome));
            }

            return Some(self.retreat());
        }
    }

    fn finish(&mut self) -> SearchResult {
        while self.next_event().is_some() {}
        self.tracker.take_result()
    }
}

/// Runs backtracking to completion.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Enumerates solutions for an `n x n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::backtrack::{BacktrackConfig, BacktrackRunner};
    ///
    /// let result = BacktrackRunner::run(6, &BacktrackConfig::default()).unwrap();
    /// assert_eq!(result.solutions.len(), 4);
    /// ```
    pub fn run(n: usize, config: &BacktrackConfig) -> Result<SearchResult, SearchError> {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs backtracking with an optional cancellation flag.
    pub fn run_with_cancel(
        n: usize,
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        let mut search = BacktrackSearch::new(n, config, cancel)?;
        Ok(search.finish())
    }
}
