//! Greedy best-first search.
//!
//! A min-heap frontier ordered by conflict count (ties in insertion
//! order), seeded with a few random boards. Every exact board is marked
//! visited when first pushed, so no state is ever expanded twice and the
//! search terminates on the finite state space. Memory is bounded by the
//! expansion cap: at most `seeds + max_expansions * N * (N - 1)` states,
//! and configurations whose bound overflows `usize` are rejected.

mod config;
mod runner;

pub use config::{BestFirstConfig, SEED_STATES_RANGE};
pub use runner::{BestFirstRunner, BestFirstSearch};
