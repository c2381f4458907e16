//! Shared counters and solution collector for one search run

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::spatial::Solution;

/// Aggregate state mutated concurrently by every worker
///
/// Counters are atomics; totals are only read after all workers have been
/// joined, so relaxed ordering is sufficient. The collector keeps solutions
/// in discovery order, which varies between runs.
#[derive(Debug, Default)]
pub struct SearchState {
    iterations: AtomicU64,
    solutions: AtomicU64,
    boards: Mutex<Vec<Solution>>,
}

impl SearchState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one placement attempt, safe or not
    pub fn record_attempt(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    /// Store a captured solution and count it
    pub fn record_solution(&self, solution: Solution) {
        // A push cannot leave the vector half-written, so a poisoned lock is still usable
        self.boards
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(solution);
        self.solutions.fetch_add(1, Ordering::Relaxed);
    }

    /// Attempts counted so far
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Solutions counted so far
    pub fn solutions(&self) -> u64 {
        self.solutions.load(Ordering::Relaxed)
    }

    /// Consume the state into a report, keeping discovery order
    pub fn into_report(self, board_size: usize, elapsed: Duration) -> SearchReport {
        SearchReport {
            board_size,
            iterations: self.iterations.into_inner(),
            solution_count: self.solutions.into_inner(),
            solutions: self
                .boards
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
            elapsed,
        }
    }
}

/// Final result of a completed search, handed to the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Board dimension that was searched
    pub board_size: usize,
    /// Total placement attempts across all workers
    pub iterations: u64,
    /// Number of complete solutions found
    pub solution_count: u64,
    /// Captured solutions
    pub solutions: Vec<Solution>,
    /// Wall-clock time from fan-out to fan-in
    pub elapsed: Duration,
}

impl SearchReport {
    /// Sort solutions by their placement so output no longer depends on scheduling
    pub fn sort_solutions(&mut self) {
        self.solutions.sort_unstable();
    }

    /// Placement vectors of every captured solution, in report order
    pub fn placements(&self) -> Vec<Vec<Option<usize>>> {
        self.solutions
            .iter()
            .map(|solution| solution.placement().to_vec())
            .collect()
    }
}
