use bitvec::prelude::*;

/// Occupancy of columns and both diagonal families on an N×N board
///
/// Diagonals running down-right are indexed by `row + (n - 1) - col`,
/// anti-diagonals by `row + col`; both families have `2n - 1` lines.
/// Provides O(1) attack testing for verifying completed placements.
#[derive(Clone, Debug)]
pub struct AttackSet {
    columns: BitVec,
    diagonals: BitVec,
    anti_diagonals: BitVec,
    size: usize,
}

impl AttackSet {
    /// Create a set with nothing occupied
    pub fn new(size: usize) -> Self {
        let lines = (2 * size).saturating_sub(1);
        Self {
            columns: bitvec![0; size],
            diagonals: bitvec![0; lines],
            anti_diagonals: bitvec![0; lines],
            size,
        }
    }

    fn lines(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (row < self.size && col < self.size).then(|| (row + self.size - 1 - col, row + col))
    }

    /// Test whether a queen at `(row, col)` would be attacked
    ///
    /// Out-of-bounds positions count as attacked
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        let Some((diagonal, anti_diagonal)) = self.lines(row, col) else {
            return true;
        };

        [
            self.columns.get(col),
            self.diagonals.get(diagonal),
            self.anti_diagonals.get(anti_diagonal),
        ]
        .into_iter()
        .any(|bit| bit.as_deref() != Some(&false))
    }

    /// Mark the lines through `(row, col)` as occupied
    ///
    /// Returns `false` and leaves the set unchanged if the position was
    /// already attacked
    pub fn occupy(&mut self, row: usize, col: usize) -> bool {
        if self.is_attacked(row, col) {
            return false;
        }
        let Some((diagonal, anti_diagonal)) = self.lines(row, col) else {
            return false;
        };

        self.columns.set(col, true);
        self.diagonals.set(diagonal, true);
        self.anti_diagonals.set(anti_diagonal, true);
        true
    }
}
