//! Backtracking configuration.

use crate::search::SearchError;

/// Configuration for exhaustive backtracking.
///
/// # Examples
///
/// ```
/// use u_nqueens::backtrack::BacktrackConfig;
///
/// let config = BacktrackConfig::default()
///     .with_start_column(2)
///     .with_max_solutions(1);
/// assert!(config.validate(8).is_ok());
/// assert!(config.validate(2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackConfig {
    /// Fixes the row-0 queen in this column. `None` enumerates every
    /// placement.
    pub start_column: Option<usize>,

    /// Stops after this many solutions. `None` = enumerate all.
    pub max_solutions: Option<usize>,

    /// Wall-clock limit in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,
}

impl BacktrackConfig {
    pub fn with_start_column(mut self, col: usize) -> Self {
        self.start_column = Some(col);
        self
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration for an `n x n` board.
    pub fn validate(&self, n: usize) -> Result<(), SearchError> {
        crate::search::validate_size(n)?;
        if let Some(col) = self.start_column {
            if col >= n {
                return Err(SearchError::InvalidConfig(format!(
                    "start_column {col} is outside 0..{n}"
                )));
            }
        }
        if self.max_solutions == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_solutions must be positive or None".into(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enumerates_everything() {
        let config = BacktrackConfig::default();
        assert!(config.start_column.is_none());
        assert!(config.max_solutions.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate(4).is_ok());
    }

    #[test]
    fn test_validate_start_column_range() {
        let config = BacktrackConfig::default().with_start_column(8);
        assert!(matches!(
            config.validate(8),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(config.validate(9).is_ok());
    }

    #[test]
    fn test_validate_zero_limits() {
        assert!(BacktrackConfig::default()
            .with_max_solutions(0)
            .validate(8)
            .is_err());
        assert!(BacktrackConfig::default()
            .with_time_limit_ms(0)
            .validate(8)
            .is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(matches!(
            BacktrackConfig::default().validate(1),
            Err(SearchError::InvalidSize { n: 1 })
        ));
    }
}
