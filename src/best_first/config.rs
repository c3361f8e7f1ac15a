//! Best-first search configuration.

use crate::search::SearchError;

/// Smallest and largest number of random seed states.
pub const SEED_STATES_RANGE: (usize, usize) = (2, 10);

/// Configuration for greedy best-first search.
///
/// # Examples
///
/// ```
/// use u_nqueens::best_first::BestFirstConfig;
///
/// let config = BestFirstConfig::default().with_seed_states(40);
/// assert_eq!(config.seed_states_for(8), 10);
/// assert_eq!(BestFirstConfig::default().seed_states_for(6), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestFirstConfig {
    /// Maximum number of states popped from the frontier.
    /// Also bounds the visited set.
    pub max_expansions: usize,

    /// Random full boards seeded into the frontier. `None` = `N`,
    /// always clamped to [`SEED_STATES_RANGE`].
    pub seed_states: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Wall-clock limit in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for BestFirstConfig {
    fn default() -> Self {
        Self {
            max_expansions: 20_000,
            seed_states: None,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl BestFirstConfig {
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = n;
        self
    }

    pub fn with_seed_states(mut self, n: usize) -> Self {
        self.seed_states = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Number of seed states used for an `n x n` board.
    pub fn seed_states_for(&self, n: usize) -> usize {
        let (lo, hi) = SEED_STATES_RANGE;
        self.seed_states.unwrap_or(n).clamp(lo, hi)
    }

    /// Upper bound on states ever stored for an `n x n` board:
    /// `seeds + max_expansions * N * (N - 1)`. `None` on overflow.
    pub fn state_bound(&self, n: usize) -> Option<usize> {
        n.checked_mul(n.saturating_sub(1))?
            .checked_mul(self.max_expansions)?
            .checked_add(self.seed_states_for(n))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidConfig(
                "max_expansions must be at least 1".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(SearchError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
