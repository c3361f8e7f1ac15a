//! Repeated independent runs for timing statistics.

use super::config::{SearchConfig, Strategy};
use super::runner::run_with_cancel;
use crate::search::{SearchError, SearchResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Results of a batch of runs of one strategy on one board size.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub strategy: Strategy,
    pub n: usize,
    /// One result per run, in run order.
    pub runs: Vec<SearchResult>,
}

impl BatchReport {
    /// Number of runs that found a solution.
    pub fn solved(&self) -> usize {
        self.runs.iter().filter(|r| r.is_solved()).count()
    }

    /// Fraction of runs that found a solution.
    pub fn success_rate(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.solved() as f64 / self.runs.len() as f64
    }

    /// Time to the first solution of every solved run.
    pub fn solution_times(&self) -> Vec<Duration> {
        self.runs
            .iter()
            .filter(|r| r.is_solved())
            .filter_map(|r| r.solutions.first().map(|s| s.found_at))
            .collect()
    }

    pub fn mean_elapsed(&self) -> Option<Duration> {
        let total: Duration = self.runs.iter().map(|r| r.elapsed).sum();
        let count = u32::try_from(self.runs.len()).ok().filter(|&c| c > 0)?;
        Some(total / count)
    }

    pub fn min_elapsed(&self) -> Option<Duration> {
        self.runs.iter().map(|r| r.elapsed).min()
    }

    pub fn max_elapsed(&self) -> Option<Duration> {
        self.runs.iter().map(|r| r.elapsed).max()
    }
}

/// Executes independent runs of a strategy, on the rayon pool when the
/// `parallel` feature is enabled.
///
/// Each run owns its own engine; only the cancellation flag is shared.
/// With a seed, run `i` uses `seed + i`.
pub struct BatchRunner;

impl BatchRunner {
    /// Runs `strategy` `runs` times on an `n x n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::driver::{BatchRunner, SearchConfig, Strategy};
    ///
    /// let config = SearchConfig::default().with_seed(1);
    /// let report = BatchRunner::run(Strategy::HillClimbing, 8, &config, 4, None).unwrap();
    /// assert_eq!(report.runs.len(), 4);
    /// assert!(report.min_elapsed() <= report.max_elapsed());
    /// ```
    pub fn run(
        strategy: Strategy,
        n: usize,
        config: &SearchConfig,
        runs: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BatchReport, SearchError> {
        if runs == 0 {
            return Err(SearchError::InvalidConfig(
                "runs must be at least 1".into(),
            ));
        }
        info!(
            event = "batch_start",
            strategy = strategy.name(),
            n,
            runs,
        );

        let single = |index: usize| {
            run_with_cancel(strategy, n, &config.for_run(index), cancel.clone())
        };

        #[cfg(feature = "parallel")]
        let results: Result<Vec<SearchResult>, SearchError> =
            (0..runs).into_par_iter().map(single).collect();

        #[cfg(not(feature = "parallel"))]
        let results: Result<Vec<SearchResult>, SearchError> = (0..runs).map(single).collect();

        let report = BatchReport {
            strategy,
            n,
            runs: results?,
        };
        info!(
            event = "batch_end",
            strategy = strategy.name(),
            n,
            runs,
            solved = report.solved(),
            mean_ms = report.mean_elapsed().map(|d| d.as_millis() as u64),
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchOutcome;

    #[test]
    fn test_batch_collects_every_run() {
        let config = SearchConfig::default().with_seed(10);
        let report = BatchRunner::run(Strategy::HillClimbing, 8, &config, 6, None).unwrap();
        assert_eq!(report.runs.len(), 6);
        assert_eq!(report.strategy, Strategy::HillClimbing);
        assert_eq!(report.n, 8);
        assert_eq!(report.solution_times().len(), report.solved());
        assert!(report.mean_elapsed().is_some());
        assert!(report.min_elapsed() <= report.mean_elapsed());
        assert!(report.mean_elapsed() <= report.max_elapsed());
    }

    #[test]
    fn test_batch_seeds_are_offset_per_run() {
        let config = SearchConfig::default().with_seed(100);
        let batch = BatchRunner::run(Strategy::Cultural, 6, &config, 3, None).unwrap();
        for (i, result) in batch.runs.iter().enumerate() {
            let single = crate::driver::run(Strategy::Cultural, 6, &config.for_run(i)).unwrap();
            assert_eq!(single.outcome, result.outcome);
            assert_eq!(single.steps, result.steps);
        }
    }

    #[test]
    fn test_backtracking_batch_is_deterministic() {
        let report =
            BatchRunner::run(Strategy::Backtracking, 6, &SearchConfig::default(), 3, None)
                .unwrap();
        assert_eq!(report.solved(), 3);
        assert!((report.success_rate() - 1.0).abs() < 1e-10);
        for result in &report.runs {
            assert_eq!(result.solutions.len(), 4);
        }
    }

    #[test]
    fn test_cancelled_batch() {
        let cancel = Arc::new(AtomicBool::new(true));
        let report = BatchRunner::run(
            Strategy::BestFirst,
            8,
            &SearchConfig::default(),
            4,
            Some(cancel),
        )
        .unwrap();
        assert!(report
            .runs
            .iter()
            .all(|r| r.outcome == SearchOutcome::Cancelled));
        assert_eq!(report.solved(), 0);
        assert!(report.solution_times().is_empty());
    }

    #[test]
    fn test_timed_out_batch_counts_solutions_once() {
        let config = SearchConfig::default().with_time_limit_seconds(0.05);
        let report = BatchRunner::run(Strategy::Backtracking, 16, &config, 2, None).unwrap();
        assert_eq!(report.solved(), 2);
        assert_eq!(report.solution_times().len(), report.solved());
        assert!(report.runs.iter().all(|r| r.timed_out));
    }

    #[test]
    fn test_invalid_batch() {
        assert!(matches!(
            BatchRunner::run(Strategy::Backtracking, 8, &SearchConfig::default(), 0, None),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            BatchRunner::run(Strategy::Backtracking, 2, &SearchConfig::default(), 2, None),
            Err(SearchError::InvalidSize { n: 2 })
        ));
    }
}
