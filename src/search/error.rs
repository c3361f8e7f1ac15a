//! Configuration and input errors.
//!
//! Only rejected inputs are errors. Running out of budget or being
//! cancelled are normal outcomes reported through
//! [`SearchOutcome`](super::SearchOutcome).

use thiserror::Error;

/// Largest supported board size.
///
/// Keeps `N * (N - 1)` neighbours, the visited set and the O(N²) conflict
/// evaluation within interactive bounds.
pub const MAX_BOARD_SIZE: usize = 256;

/// Smallest board size with a non-trivial solution space.
pub const MIN_BOARD_SIZE: usize = 4;

/// Error raised when a search cannot be started.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("board size {n} is too small: N-Queens needs N >= 4")]
    InvalidSize { n: usize },

    #[error("board size {n} exceeds the supported maximum of {max}")]
    SizeTooLarge { n: usize, max: usize },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Validates a board size before any search state is allocated.
///
/// # Examples
///
/// ```
/// use u_nqueens::search::validate_size;
///
/// assert!(validate_size(8).is_ok());
/// assert!(validate_size(3).is_err());
/// ```
pub fn validate_size(n: usize) -> Result<(), SearchError> {
    if n < MIN_BOARD_SIZE {
        return Err(SearchError::InvalidSize { n });
    }
    if n > MAX_BOARD_SIZE || n.checked_mul(n - 1).is_none() {
        return Err(SearchError::SizeTooLarge {
            n,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
