//! Strategy selection and the unified run configuration.

use crate::backtrack::BacktrackConfig;
use crate::best_first::BestFirstConfig;
use crate::cultural::CulturalConfig;
use crate::hill::HillClimbConfig;
use crate::search::SearchError;
use std::fmt;
use std::str::FromStr;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    Backtracking,
    HillClimbing,
    BestFirst,
    Cultural,
}

impl Strategy {
    /// Every strategy, in presentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Backtracking,
        Strategy::HillClimbing,
        Strategy::BestFirst,
        Strategy::Cultural,
    ];

    /// Stable snake_case name, also used as the `strategy` log field.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Backtracking => "backtracking",
            Strategy::HillClimbing => "hill_climbing",
            Strategy::BestFirst => "best_first",
            Strategy::Cultural => "cultural",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| SearchError::InvalidConfig(format!("unknown strategy '{s}'")))
    }
}

/// Run parameters shared by every strategy.
///
/// Each field is optional; unset fields fall back to the defaults of the
/// strategy being run, and fields a strategy does not use are ignored.
///
/// # Examples
///
/// ```
/// use u_nqueens::driver::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_restarts(10)
///     .with_time_limit_seconds(2.5)
///     .with_seed(7);
/// let hill = config.to_hill_climb_config();
/// assert_eq!(hill.max_restarts, 10);
/// assert_eq!(hill.max_steps_per_restart, 500);
/// assert_eq!(hill.time_limit_ms, Some(2_500));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub max_restarts: Option<usize>,
    pub max_steps_per_restart: Option<usize>,
    pub max_sideways: Option<usize>,
    pub max_expansions: Option<usize>,
    pub seed_states: Option<usize>,
    pub pop_size: Option<usize>,
    pub generations: Option<usize>,
    /// Wall-clock limit. Unset keeps the strategy default (none, except
    /// 60 s for the cultural algorithm).
    pub time_limit_seconds: Option<f64>,
    pub seed: Option<u64>,
    pub start_column: Option<usize>,
    pub max_solutions: Option<usize>,
}

impl SearchConfig {
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = Some(n);
        self
    }

    pub fn with_max_steps_per_restart(mut self, n: usize) -> Self {
        self.max_steps_per_restart = Some(n);
        self
    }

    pub fn with_max_sideways(mut self, n: usize) -> Self {
        self.max_sideways = Some(n);
        self
    }

    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    pub fn with_seed_states(mut self, n: usize) -> Self {
        self.seed_states = Some(n);
        self
    }

    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = Some(n);
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = Some(n);
        self
    }

    pub fn with_time_limit_seconds(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_column(mut self, col: usize) -> Self {
        self.start_column = Some(col);
        self
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }

    /// Parses a configuration from TOML.
    ///
    /// ```
    /// use u_nqueens::driver::SearchConfig;
    ///
    /// let config = SearchConfig::from_toml_str("pop_size = 80\nseed = 3\n").unwrap();
    /// assert_eq!(config.pop_size, Some(80));
    /// assert_eq!(config.generations, None);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, SearchError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields that are not validated by a strategy config.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(seconds) = self.time_limit_seconds {
            if !(seconds.is_finite() && seconds > 0.0) {
                return Err(SearchError::InvalidConfig(format!(
                    "time_limit_seconds must be a positive number, got {seconds}"
                )));
            }
        }
        Ok(())
    }

    /// Time limit rounded up to whole milliseconds.
    fn time_limit_ms(&self) -> Option<u64> {
        self.time_limit_seconds
            .map(|seconds| ((seconds * 1_000.0).ceil() as u64).max(1))
    }

    /// Copy of this configuration for the `index`-th run of a batch.
    pub(crate) fn for_run(&self, index: usize) -> Self {
        Self {
            seed: self.seed.map(|seed| seed.wrapping_add(index as u64)),
            ..self.clone()
        }
    }

    pub fn to_backtrack_config(&self) -> BacktrackConfig {
        BacktrackConfig {
            start_column: self.start_column,
            max_solutions: self.max_solutions,
            time_limit_ms: self.time_limit_ms(),
        }
    }

    pub fn to_hill_climb_config(&self) -> HillClimbConfig {
        let defaults = HillClimbConfig::default();
        HillClimbConfig {
            max_restarts: self.max_restarts.unwrap_or(defaults.max_restarts),
            max_steps_per_restart: self
                .max_steps_per_restart
                .unwrap_or(defaults.max_steps_per_restart),
            max_sideways: self.max_sideways.unwrap_or(defaults.max_sideways),
            seed: self.seed,
            time_limit_ms: self.time_limit_ms(),
        }
    }

    pub fn to_best_first_config(&self) -> BestFirstConfig {
        let defaults = BestFirstConfig::default();
        BestFirstConfig {
            max_expansions: self.max_expansions.unwrap_or(defaults.max_expansions),
            seed_states: self.seed_states,
            seed: self.seed,
            time_limit_ms: self.time_limit_ms(),
        }
    }

    pub fn to_cultural_config(&self) -> CulturalConfig {
        let defaults = CulturalConfig::default();
        CulturalConfig {
            pop_size: self.pop_size.unwrap_or(defaults.pop_size),
            generations: self.generations.unwrap_or(defaults.generations),
            seed: self.seed,
            time_limit_ms: self.time_limit_ms().or(defaults.time_limit_ms),
            ..defaults
        }
    }
}
