//! Cultural algorithm engine and runner.
//!
//! Each generation:
//!
//! 1. Rank the population by conflicts; stop if the best has none.
//! 2. Take the elites and fold them into the [`BeliefModel`].
//! 3. Breed a fresh population column by column, sampling from the belief
//!    with probability `belief_rate` and uniformly otherwise.
//! 4. Mutate each offspring in one random column with probability
//!    `mutation_rate`.

use super::config::CulturalConfig;
use super::types::BeliefModel;
use crate::board::{Board, ScoredBoard};
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

/// Belief-guided population search as a resumable engine.
///
/// One call to `next_event` that does work runs one generation and emits
/// the generation's best board followed by an `Info` summary.
#[derive(Debug)]
pub struct CulturalSearch {
    n: usize,
    config: CulturalConfig,
    rng: StdRng,
    population: Vec<ScoredBoard>,
    belief: BeliefModel,
    generation: usize,
    pending: VecDeque<SearchEvent>,
    done: bool,
    tracker: Tracker,
}

impl CulturalSearch {
    /// Prepares a search over an `n x n` board with a random population.
    pub fn new(
        n: usize,
        config: &CulturalConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Self, SearchError> {
        validate_size(n)?;
        config.validate()?;

        info!(
            event = "search_start",
            strategy = "cultural",
            n,
            pop_size = config.pop_size,
            generations = config.generations,
            time_limit_ms = ?config.time_limit_ms,
        );

        let mut rng = create_rng(config.seed);
        let population = (0..config.pop_size)
            .map(|_| ScoredBoard::new(Board::random(n, &mut rng)))
            .collect();

        Ok(Self {
            n,
            config: config.clone(),
            rng,
            population,
            belief: BeliefModel::new(n),
            generation: 0,
            pending: VecDeque::new(),
            done: false,
            tracker: Tracker::new(cancel, config.time_limit_ms.map(Duration::from_millis)),
        })
    }

    pub fn belief(&self) -> &BeliefModel {
        &self.belief
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[ScoredBoard] {
        &self.population
    }

    fn breed(&mut self) -> Board {
        let n = self.n;
        let mut rows: Vec<usize> = (0..n)
            .map(|col| {
                if self.rng.random_bool(self.config.belief_rate) {
                    self.belief.sample_row(col, &mut self.rng)
                } else {
                    self.rng.random_range(0..n)
                }
            })
            .collect();

        if self.rng.random_bool(self.config.mutation_rate) {
            let col = self.rng.random_range(0..n);
            rows[col] = self.rng.random_range(0..n);
        }
        Board::from_rows_unchecked(rows)
    }

    fn end(&mut self, outcome: SearchOutcome) -> SearchEvent {
        self.tracker.finish(outcome);
        self.done = true;
        info!(
            event = "search_end",
            strategy = "cultural",
            n = self.n,
            generations = self.generation,
            best = ?self.belief.best().map(|b| b.conflicts),
            duration_ms = self.tracker.elapsed().as_millis() as u64,
        );
        SearchEvent::End
    }
}

impl SearchEngine for CulturalSearch {
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

        // Stable sort keeps generation order among equal individuals.
        self.population.sort_by_key(|member| member.conflicts);
        if let Some(best) = self.population.first() {
            self.tracker.offer(best);
            if best.conflicts == 0 {
                let board = best.board.clone();
                self.tracker.record_solution(board.clone());
                let end = self.end(SearchOutcome::Found(board.clone()));
                self.pending.push_back(end);
                return Some(SearchEvent::Found(board));
            }
        }

        if self.generation >= self.config.generations {
            return Some(self.end(SearchOutcome::Exhausted));
        }

        let elite_count = self.config.elite_count();
        let improved = self.belief.update(&self.population[..elite_count]);

        let offspring: Vec<ScoredBoard> = (0..self.config.pop_size)
            .map(|_| ScoredBoard::new(self.breed()))
            .collect();
        self.population = offspring;
        self.generation += 1;
        self.tracker.step();

        let Some(best) = self.population.iter().min_by_key(|m| m.conflicts).cloned() else {
            return Some(self.end(SearchOutcome::Exhausted));
        };
        debug!(
            generation = self.generation,
            best = best.conflicts,
            belief_improved = improved,
            "generation complete"
        );
        self.pending.push_back(SearchEvent::Info(format!(
            "gen:{} best:{}",
            self.generation, best.conflicts
        )));
        Some(SearchEvent::SetBoard(best.board))
    }

    fn finish(&mut self) -> SearchResult {
        while self.next_event().is_some() {}
        self.tracker.take_result()
    }
}

/// Runs the cultural algorithm to completion.
pub struct CulturalRunner;

impl CulturalRunner {
    /// Searches for a solution of an `n x n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::cultural::{CulturalConfig, CulturalRunner};
    ///
    /// let config = CulturalConfig::default().with_seed(42);
    /// let result = CulturalRunner::run(4, &config).unwrap();
    /// assert!(result.is_solved());
    /// ```
    pub fn run(n: usize, config: &CulturalConfig) -> Result<SearchResult, SearchError> {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs the cultural algorithm with an optional cancellation flag.
    pub fn run_with_cancel(
        n: usize,
        config: &CulturalConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        let mut search = CulturalSearch::new(n, config, cancel)?;
        Ok(search.finish())
    }
}
