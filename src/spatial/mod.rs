//! Board data structures
//!
//! This module contains the spatial side of the search:
//! - The mutable working board each worker backtracks on
//! - Immutable solution snapshots captured from it

/// Working board and cell states
pub mod board;
/// Captured solutions and their verification
pub mod solution;

pub use board::{Board, Cell};
pub use solution::Solution;
