//! Random-restart hill climbing with sideways moves.
//!
//! Each step evaluates the full single-queen neighbourhood and moves to a
//! uniformly chosen best neighbour. Equal-cost moves are allowed up to a
//! sideways budget to cross plateaus; otherwise the restart is abandoned
//! and a fresh random board is drawn.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*,
//!   §4.1.1 (hill climbing on 8-queens, sideways moves, random restarts)

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{ClimbPhase, HillClimbRunner, HillClimbSearch};
