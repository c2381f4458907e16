//! Multi-threaded backtracking solver for the N-Queens puzzle
//!
//! The search fans out one worker thread per first-row column. Each worker
//! backtracks row by row on its own board, pruning attacked positions, and
//! stores every complete placement in a shared collector. Once all workers
//! have been joined the caller receives the counters and sorted solutions.

#![forbid(unsafe_code)]

/// Safety checks, backtracking engine and worker dispatch
pub mod algorithm;
/// Command-line interface, configuration, rendering and error handling
pub mod io;
/// Working boards and captured solutions
pub mod spatial;

pub use algorithm::dispatcher::{SearchObserver, solve, solve_with_observer};
pub use algorithm::state::SearchReport;
pub use io::configuration::Configuration;
pub use io::error::{NQueensError, Result};
