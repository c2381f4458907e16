//! Depth-first backtracking over queen placements
//!
//! Each call works row by row on a board owned by the calling worker,
//! trying columns in ascending order. Unsafe columns are pruned before
//! recursing and every placement is undone before the next column is tried.

use crate::algorithm::safety::is_safe;
use crate::algorithm::state::SearchState;
use crate::spatial::Board;

/// Worker entry point for a fixed row-0 column
///
/// Counts one attempt for `(0, column)`, then either captures the board
/// (a 1×1 board is complete once its only queen is placed) or continues the
/// search from row 1.
pub fn solve_from_column(board: &mut Board, column: usize, state: &SearchState) {
    try_column(board, 0, column, state);
}

/// Try every column of `row` and recurse below each safe placement
pub fn solve_row(board: &mut Board, row: usize, state: &SearchState) {
    for col in 0..board.size() {
        try_column(board, row, col, state);
    }
}

fn try_column(board: &mut Board, row: usize, col: usize, state: &SearchState) {
    state.record_attempt();

    if !is_safe(board, row, col) {
        return;
    }

    board.place(row, col);

    if row + 1 == board.size() {
        let solution = board.snapshot();
        debug_assert!(solution.is_valid(), "captured an attacking placement");
        state.record_solution(solution);
    } else {
        solve_row(board, row + 1, state);
    }

    board.remove(row, col);
}
