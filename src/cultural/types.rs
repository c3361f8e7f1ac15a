//! The belief space shared across generations.

use crate::board::ScoredBoard;
use rand::Rng;

/// Cultural memory derived from each generation's elites.
///
/// - Per-column row bounds start as an empty interval and only ever widen.
/// - The elite row frequencies of the latest generation weight sampling
///   inside those bounds (Laplace-smoothed, so every row in range stays
///   reachable).
/// - The best board is replaced only by a strictly better one.
#[derive(Debug, Clone)]
pub struct BeliefModel {
    n: usize,
    min_row: Vec<usize>,
    max_row: Vec<usize>,
    counts: Vec<Vec<usize>>,
    best: Option<ScoredBoard>,
}

impl BeliefModel {
    /// An empty belief for an `n x n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            min_row: vec![n.saturating_sub(1); n],
            max_row: vec![0; n],
            counts: vec![vec![0; n]; n],
            best: None,
        }
    }

    /// Row bounds observed for `col`, or `None` before the first update.
    pub fn bounds(&self, col: usize) -> Option<(usize, usize)> {
        let (lo, hi) = (self.min_row[col], self.max_row[col]);
        (lo <= hi && self.counts[col].iter().any(|&c| c > 0)).then_some((lo, hi))
    }

    pub fn min_rows(&self) -> &[usize] {
        &self.min_row
    }

    pub fn max_rows(&self) -> &[usize] {
        &self.max_row
    }

    /// Best board seen across all updates.
    pub fn best(&self) -> Option<&ScoredBoard> {
        self.best.as_ref()
    }

    /// Absorbs a generation's elites. Returns `true` when the best board
    /// improved.
    pub fn update(&mut self, elites: &[ScoredBoard]) -> bool {
        if elites.is_empty() {
            return false;
        }
        for column in self.counts.iter_mut() {
            column.iter_mut().for_each(|c| *c = 0);
        }

        let mut improved = false;
        for elite in elites {
            for (col, &row) in elite.board.rows().iter().enumerate() {
                self.min_row[col] = self.min_row[col].min(row);
                self.max_row[col] = self.max_row[col].max(row);
                self.counts[col][row] += 1;
            }
            let better = self
                .best
                .as_ref()
                .is_none_or(|best| elite.conflicts < best.conflicts);
            if better {
                self.best = Some(elite.clone());
                improved = true;
            }
        }
        improved
    }

    /// Draws a row for `col` inside its bounds, weighted by elite
    /// frequency + 1. Falls back to uniform before the first update.
    pub fn sample_row<R: Rng>(&self, col: usize, rng: &mut R) -> usize {
        let Some((lo, hi)) = self.bounds(col) else {
            return rng.random_range(0..self.n);
        };

        let weights = &self.counts[col][lo..=hi];
        let total: usize = weights.iter().map(|&c| c + 1).sum();
        let threshold = rng.random_range(0..total);
        let mut cumulative = 0;
        for (offset, &count) in weights.iter().enumerate() {
            cumulative += count + 1;
            if cumulative > threshold {
                return lo + offset;
            }
        }
        hi
    }
}
