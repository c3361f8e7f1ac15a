//! Best-first search engine and runner.

use super::config::BestFirstConfig;
use crate::board::{neighbors, Board, ScoredBoard};
use crate::search::{
    create_rng, validate_size, SearchEngine, SearchError, SearchEvent, SearchOutcome,
    SearchResult, Tracker,
};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const INFO_INTERVAL: usize = 50;

/// Frontier entry: lower conflicts first, then earlier insertion.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    conflicts: usize,
    order: u64,
    board: Board,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the best entry is on top.
        other
            .conflicts
            .cmp(&self.conflicts)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search as a resumable engine. Each expansion emits the
/// popped board as [`SearchEvent::SetBoard`].
#[derive(Debug)]
pub struct BestFirstSearch {
    n: usize,
    max_expansions: usize,
    frontier: BinaryHeap<FrontierEntry>,
    visited: HashSet<Board>,
    next_order: u64,
    expansions: usize,
    pending: VecDeque<SearchEvent>,
    done: bool,
    tracker: Tracker,
}

impl BestFirstSearch {
    /// Prepares a search over an `n x n` board and seeds the frontier.
    pub fn new(
        n: usize,
        config: &BestFirstConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Self, SearchError> {
        validate_size(n)?;
        config.validate()?;
        if config.state_bound(n).is_none() {
            return Err(SearchError::InvalidConfig(format!(
                "max_expansions {} overflows the state bound for N = {n}",
                config.max_expansions
            )));
        }

        let seeds = config.seed_states_for(n);
        info!(
            event = "search_start",
            strategy = "best_first",
            n,
            max_expansions = config.max_expansions,
            seeds,
        );

        let mut rng = create_rng(config.seed);
        let mut search = Self {
            n,
            max_expansions: config.max_expansions,
            frontier: BinaryHeap::new(),
            visited: HashSet::new(),
            next_order: 0,
            expansions: 0,
            pending: VecDeque::new(),
            done: false,
            tracker: Tracker::new(cancel, config.time_limit_ms.map(Duration::from_millis)),
        };
        for _ in 0..seeds {
            search.push(Board::random(n, &mut rng));
        }
        Ok(search)
    }

    /// Number of distinct boards ever pushed onto the frontier.
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Number of boards waiting to be expanded.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Pushes `board` unless it was seen before.
    fn push(&mut self, board: Board) {
        if self.visited.contains(&board) {
            return;
        }
        self.visited.insert(board.clone());
        let scored = ScoredBoard::new(board);
        self.frontier.push(FrontierEntry {
            conflicts: scored.conflicts,
            order: self.next_order,
            board: scored.board,
        });
        self.next_order += 1;
    }

    fn end(&mut self, outcome: SearchOutcome) -> SearchEvent {
        self.tracker.finish(outcome);
        self.done = true;
        info!(
            event = "search_end",
            strategy = "best_first",
            n = self.n,
            expansions = self.expansions,
            visited = self.visited.len(),
            frontier = self.frontier.len(),
            duration_ms = self.tracker.elapsed().as_millis() as u64,
        );
        SearchEvent::End
    }
}

impl SearchEngine for BestFirstSearch {
    fn next_event(&mut self) -> Option<SearchEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if self.done {
            return None;
        }

        if let Some(outcome) = self.tracker.interruption() {
            return Some(self.end(outcome));
        }
        if self.expansions >= self.max_expansions {
            return Some(self.end(SearchOutcome::Exhausted));
        }
        let Some(entry) = self.frontier.pop() else {
            debug!(expansions = self.expansions, "frontier empty");
            return Some(self.end(SearchOutcome::Exhausted));
        };

        self.expansions += 1;
        self.tracker.step();
        let scored = ScoredBoard {
            board: entry.board,
            conflicts: entry.conflicts,
        };
        self.tracker.offer(&scored);

        if scored.conflicts == 0 {
            self.tracker.record_solution(scored.board.clone());
            self.pending
                .push_back(SearchEvent::Found(scored.board.clone()));
            let end = self.end(SearchOutcome::Found(scored.board.clone()));
            self.pending.push_back(end);
            return Some(SearchEvent::SetBoard(scored.board));
        }

        let children: Vec<Board> = neighbors(&scored.board).collect();
        for child in children {
            self.push(child);
        }

        if self.expansions.is_multiple_of(INFO_INTERVAL) {
            self.pending.push_back(SearchEvent::Info(format!(
                "expansions:{} frontier:{}",
                self.expansions,
                self.frontier.len()
            )));
        }
        Some(SearchEvent::SetBoard(scored.board))
    }

    fn finish(&mut self) -> SearchResult {
        while self.next_event().is_some() {}
        self.tracker.take_result()
    }
}

/// Runs best-first search to completion.
pub struct BestFirstRunner;

impl BestFirstRunner {
    /// Searches for a solution of an `n x n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::best_first::{BestFirstConfig, BestFirstRunner};
    ///
    /// let config = BestFirstConfig::default().with_seed(42);
    /// let result = BestFirstRunner::run(5, &config).unwrap();
    /// assert!(result.is_solved());
    /// ```
    pub fn run(n: usize, config: &BestFirstConfig) -> Result<SearchResult, SearchError> {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs best-first search with an optional cancellation flag.
    pub fn run_with_cancel(
        n: usize,
        config: &BestFirstConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        let mut search = BestFirstSearch::new(n, config, cancel)?;
        Ok(search.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Events;

    #[test]
    fn test_frontier_order() {
        let board = Board::new(vec![0, 0, 0, 0]).unwrap();
        let mut heap = BinaryHeap::new();
        for (conflicts, order) in [(3, 0), (1, 1), (1, 2), (0, 3), (2, 4)] {
            heap.push(FrontierEntry {
                conflicts,
                order,
                board: board.clone(),
            });
        }
        let popped: Vec<(usize, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.conflicts, e.order))
            .collect();
        assert_eq!(popped, vec![(0, 3), (1, 1), (1, 2), (2, 4), (3, 0)]);
    }

    #[test]
    fn test_small_boards_solved() {
        // 4^4 and 5^5 states fit inside the default expansion cap, so the
        // search is complete there.
        for n in [4, 5] {
            for seed in 0..5 {
                let config = BestFirstConfig::default().with_seed(seed);
                let result = BestFirstRunner::run(n, &config).unwrap();
                assert!(result.is_solved(), "n={n} seed={seed}");
                assert_eq!(result.board().unwrap().conflicts(), 0);
            }
        }
    }

    #[test]
    fn test_never_expands_twice() {
        let config = BestFirstConfig::default()
            .with_max_expansions(2_000)
            .with_seed(9);
        let search = BestFirstSearch::new(10, &config, None).unwrap();
        let expanded: Vec<Board> = Events::new(search)
            .filter_map(|e| match e {
                SearchEvent::SetBoard(board) => Some(board),
                _ => None,
            })
            .collect();
        let unique: HashSet<&Board> = expanded.iter().collect();
        assert_eq!(unique.len(), expanded.len());
    }

    #[test]
    fn test_expansion_cap_bounds_memory() {
        let n = 12;
        let config = BestFirstConfig::default()
            .with_max_expansions(30)
            .with_seed(1);
        let mut search = BestFirstSearch::new(n, &config, None).unwrap();
        let result = search.finish();

        assert!(result.steps <= 30);
        assert_eq!(search.expansions(), result.steps);
        assert!(search.visited_len() <= config.state_bound(n).unwrap());
        if !result.is_solved() {
            assert!(result.is_exhausted());
            assert!(result.best.as_ref().unwrap().conflicts > 0);
        }
    }

    #[test]
    fn test_seeded_frontier() {
        let config = BestFirstConfig::default().with_seed_states(7).with_seed(3);
        let search = BestFirstSearch::new(12, &config, None).unwrap();
        // Random duplicates collapse, so at most 7.
        assert!(search.frontier_len() <= 7);
        assert!(search.frontier_len() >= 1);
        assert_eq!(search.visited_len(), search.frontier_len());
    }

    #[test]
    fn test_found_event_precedes_end() {
        let config = BestFirstConfig::default().with_seed(4);
        let search = BestFirstSearch::new(4, &config, None).unwrap();
        let events: Vec<SearchEvent> = Events::new(search).collect();
        let n = events.len();
        assert!(n >= 3);
        assert!(matches!(&events[n - 2], SearchEvent::Found(b) if b.is_solution()));
        assert_eq!(events[n - 1], SearchEvent::End);
    }

    #[test]
    fn test_info_every_fifty_expansions() {
        let n = 52;
        let config = BestFirstConfig::default().with_max_expansions(51).with_seed(2);
        let mut search = BestFirstSearch::new(n, &config, None).unwrap();
        // Every queen in row 0: a solution differs in at least n - 1 columns,
        // so it cannot be popped within 51 expansions.
        search.frontier.clear();
        search.visited.clear();
        search.push(Board::new(vec![0; n]).unwrap());

        let infos: Vec<String> = Events::new(search)
            .filter_map(|e| match e {
                SearchEvent::Info(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(infos.len(), 1);
        assert!(infos[0].starts_with("expansions:50 frontier:"));
    }

    #[test]
    fn test_rejects_overflowing_state_bound() {
        let config = BestFirstConfig::default().with_max_expansions(usize::MAX);
        assert!(matches!(
            BestFirstSearch::new(256, &config, None),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cancelled() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            BestFirstRunner::run_with_cancel(8, &BestFirstConfig::default(), Some(cancel))
                .unwrap();
        assert!(result.is_cancelled());
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            BestFirstRunner::run(0, &BestFirstConfig::default()),
            Err(SearchError::InvalidSize { n: 0 })
        ));
    }
}
