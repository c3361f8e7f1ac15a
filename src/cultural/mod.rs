//! Cultural algorithm: a population search guided by a shared belief space.
//!
//! The belief space records, per column, the range of rows the elites have
//! ever used and how often each row appeared among the latest elites. New
//! individuals are drawn column by column from that belief with probability
//! `belief_rate`, and uniformly otherwise.
//!
//! # References
//!
//! - Reynolds, R. G. (1994). "An Introduction to Cultural Algorithms",
//!   *Proceedings of the 3rd Annual Conference on Evolutionary Programming*

mod config;
mod runner;
mod types;

pub use config::CulturalConfig;
pub use runner::{CulturalRunner, CulturalSearch};
pub use types::BeliefModel;
