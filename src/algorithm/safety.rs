//! Attack checks for candidate queen positions
//!
//! Every check is a read-only predicate over a single board, so workers can
//! run them concurrently on their own copies without coordination.

use crate::spatial::Board;

/// Unit step along a diagonal as `(row_step, col_step)`
pub type Direction = (isize, isize);

/// The four diagonal directions walked by [`is_safe`]
pub const DIAGONALS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Check that no queen exists anywhere in `row`
///
/// Scans the whole row rather than a filled prefix; the search keeps at most
/// one queen per row so the answer is the same.
pub fn row_safe(board: &Board, row: usize) -> bool {
    board
        .row(row)
        .is_none_or(|cells| !cells.iter().any(|cell| cell.is_queen()))
}

/// Check that no queen exists anywhere in `col`
pub fn col_safe(board: &Board, col: usize) -> bool {
    board
        .column(col)
        .is_none_or(|cells| !cells.iter().any(|cell| cell.is_queen()))
}

/// Walk outward from `(row, col)` in one diagonal direction
///
/// Starts at `(row + row_step, col + col_step)` and stops at the board edge.
/// Returns `false` as soon as a queen is encountered.
pub fn diagonal_safe(
    board: &Board,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
) -> bool {
    let size = board.size();
    let mut position = step(row, col, row_step, col_step);

    while let Some((r, c)) = position.filter(|&(r, c)| r < size && c < size) {
        if board.is_queen(r, c) {
            return false;
        }
        position = step(r, c, row_step, col_step);
    }

    true
}

fn step(row: usize, col: usize, row_step: isize, col_step: isize) -> Option<(usize, usize)> {
    Some((
        row.checked_add_signed(row_step)?,
        col.checked_add_signed(col_step)?,
    ))
}

/// Check whether a queen at `(row, col)` would be attacked by any queen on the board
///
/// Combines the row, column and all four diagonal checks. Positions off the
/// board are never safe.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    row < board.size()
        && col < board.size()
        && row_safe(board, row)
        && col_safe(board, col)
        && DIAGONALS
            .iter()
            .all(|&(row_step, col_step)| diagonal_safe(board, row, col, row_step, col_step))
}
