//! Board state, conflict evaluation and the single-move neighbourhood.
//!
//! These are the leaf components every strategy builds on:
//!
//! - [`Board`]: one queen per column, `rows[col] = row`
//! - [`conflicts`]: number of attacking pairs (0 = solution)
//! - [`neighbors`]: the `N * (N - 1)` boards one queen move away

mod conflicts;
mod neighbors;
mod state;

pub use conflicts::conflicts;
pub use neighbors::{neighbors, Neighbors};
pub use state::{Board, ScoredBoard};
