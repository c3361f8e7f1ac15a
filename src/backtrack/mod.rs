//! Exhaustive backtracking.
//!
//! Places one queen per row, top-down, checking the column and both
//! diagonals against the rows already placed. Run to completion it
//! enumerates every solution (2 for N = 4, 92 for N = 8).
//!
//! The recursion is expressed as an explicit stack so the search can be
//! suspended after every placement: [`BacktrackSearch`] emits
//! `Place` / `Remove` / `Found` events one at a time.

mod config;
mod runner;

pub use config::BacktrackConfig;
pub use runner::{BacktrackRunner, BacktrackSearch};
