//! Strategy dispatch, unified configuration and batch runs.
//!
//! [`run`] and [`start`] pick a strategy by [`Strategy`] and derive its
//! config from a single [`SearchConfig`]. [`BatchRunner`] repeats a run to
//! gather a timing distribution, each run on its own worker with its own
//! engine state.

mod batch;
mod config;
mod runner;

pub use batch::{BatchReport, BatchRunner};
pub use config::{SearchConfig, Strategy};
pub use runner::{run, run_with_cancel, start};
