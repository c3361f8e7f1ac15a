//! N-Queens search engines.
//!
//! Places N queens on an N x N board so that no two attack each other,
//! using four interchangeable strategies:
//!
//! - **Backtracking**: exhaustive depth-first placement, one queen per row;
//!   enumerates every solution.
//! - **Hill climbing**: random-restart steepest descent over single-queen
//!   moves, with a sideways budget for plateaus.
//! - **Best-first**: greedy priority search over full boards with a global
//!   visited set.
//! - **Cultural algorithm**: a population search steered by a belief space
//!   built from each generation's elites.
//!
//! Every strategy is a resumable [`SearchEngine`](search::SearchEngine):
//! `next_event()` yields placement, board and progress events for
//! step-by-step visualisation, always ending with a single
//! [`SearchEvent::End`](search::SearchEvent::End). Runs can be cancelled
//! cooperatively through a shared `AtomicBool` and optionally bounded by a
//! wall-clock limit.
//!
//! # Quick start
//!
//! ```
//! use u_nqueens::driver::{run, SearchConfig, Strategy};
//!
//! let result = run(Strategy::HillClimbing, 8, &SearchConfig::default().with_seed(42)).unwrap();
//! let board = result.board().unwrap();
//! assert_eq!(board.conflicts(), 0);
//! println!("{board}");
//! ```
//!
//! # Architecture
//!
//! `board` holds the state and objective, `search` the shared event and
//! result vocabulary, one module per strategy builds on both, and `driver`
//! dispatches over them. The library never installs a `tracing` subscriber.

pub mod backtrack;
pub mod best_first;
pub mod board;
pub mod cultural;
pub mod driver;
pub mod hill;
pub mod search;

pub use board::{Board, ScoredBoard};
pub use driver::{run, run_with_cancel, start, SearchConfig, Strategy};
pub use search::{SearchEngine, SearchError, SearchEvent, SearchOutcome, SearchResult};
