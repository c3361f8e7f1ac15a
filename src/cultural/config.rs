//! Cultural algorithm configuration.

use crate::search::SearchError;

/// Configuration for the cultural (belief-guided population) search.
///
/// # Examples
///
/// ```
/// use u_nqueens::cultural::CulturalConfig;
///
/// let config = CulturalConfig::default()
///     .with_pop_size(80)
///     .with_generations(500)
///     .with_belief_rate(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.elite_count(), 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CulturalConfig {
    /// Individuals per generation.
    pub pop_size: usize,

    /// Maximum number of generations.
    pub generations: usize,

    /// Fraction of the population used as elites (at least 2 elites).
    pub elite_ratio: f64,

    /// Probability of drawing a column's row from the belief model
    /// instead of uniformly at random.
    pub belief_rate: f64,

    /// Probability of a single-column random mutation per offspring.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Wall-clock budget in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for CulturalConfig {
    fn default() -> Self {
        Self {
            pop_size: 50,
            generations: 1_000,
            elite_ratio: 0.5,
            belief_rate: 0.8,
            mutation_rate: 0.15,
            seed: None,
            time_limit_ms: Some(60_000),
        }
    }
}

impl CulturalConfig {
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_belief_rate(mut self, rate: f64) -> Self {
        self.belief_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
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

    /// Removes the wall-clock budget.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_ms = None;
        self
    }

    /// Number of elites per generation: `ceil(pop_size * elite_ratio)`,
    /// at least 2 and at most `pop_size`.
    pub fn elite_count(&self) -> usize {
        let count = (self.pop_size as f64 * self.elite_ratio).ceil() as usize;
        count.max(2).min(self.pop_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.pop_size < 2 {
            return Err(SearchError::InvalidConfig(
                "pop_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(SearchError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if !(self.elite_ratio > 0.0 && self.elite_ratio <= 1.0) {
            return Err(SearchError::InvalidConfig(format!(
                "elite_ratio must be in (0, 1], got {}",
                self.elite_ratio
            )));
        }
        for (name, rate) in [
            ("belief_rate", self.belief_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        if self.time_limit_ms == Some(0) {
            return Err(SearchError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
