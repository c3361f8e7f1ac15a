//! Hill-climbing configuration.

use crate::search::SearchError;

/// Configuration for random-restart hill climbing with sideways moves.
///
/// # Examples
///
/// ```
/// use u_nqueens::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_restarts(20)
///     .with_max_steps_per_restart(200)
///     .with_max_sideways(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Number of random initialisations before giving up.
    pub max_restarts: usize,

    /// Neighbourhood evaluations allowed per restart.
    pub max_steps_per_restart: usize,

    /// Consecutive equal-cost moves allowed to cross a plateau.
    /// Reset by every improving move.
    pub max_sideways: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Wall-clock limit in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_restarts: 50,
            max_steps_per_restart: 500,
            max_sideways: 100,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    pub fn with_max_steps_per_restart(mut self, n: usize) -> Self {
        self.max_steps_per_restart = n;
        self
    }

    pub fn with_max_sideways(mut self, n: usize) -> Self {
        self.max_sideways = n;
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

    /// Upper bound on neighbourhood evaluations for one run.
    pub fn step_budget(&self) -> usize {
        self.max_restarts.saturating_mul(self.max_steps_per_restart)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_restarts == 0 {
            return Err(SearchError::InvalidConfig(
                "max_restarts must be at least 1".into(),
            ));
        }
        if self.max_steps_per_restart == 0 {
            return Err(SearchError::InvalidConfig(
                "max_steps_per_restart must be at least 1".into(),
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
