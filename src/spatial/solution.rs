//! Immutable snapshots of completed boards

use ndarray::{Array2, ArrayView1};
use std::cmp::Ordering;

use crate::algorithm::bitset::AttackSet;
use crate::spatial::board::Cell;

/// A complete placement captured at the moment the last row was filled
///
/// Owns its cells outright, so later backtracking on the working board
/// cannot alter it. Solutions order by their placement vector, which gives
/// a canonical ordering independent of worker scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    cells: Array2<Cell>,
    placement: Vec<Option<usize>>,
    worker: Option<usize>,
}

impl Solution {
    pub(crate) fn from_cells(cells: Array2<Cell>, worker: Option<usize>) -> Self {
        let placement = cells
            .rows()
            .into_iter()
            .map(|row| row.iter().position(|cell| cell.is_queen()))
            .collect();

        Self {
            cells,
            placement,
            worker,
        }
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Row-0 column of the worker that captured this solution
    pub const fn worker(&self) -> Option<usize> {
        self.worker
    }

    /// Column of the first queen in each row, `None` for an empty row
    pub fn placement(&self) -> &[Option<usize>] {
        &self.placement
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Iterate over the rows of the captured board
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// Positions of every queen in row-major order
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_queen())
            .map(|(position, _)| position)
    }

    /// Re-check the no-attack invariant from scratch
    ///
    /// A valid solution has exactly one queen per row and no two queens
    /// sharing a column or either diagonal.
    pub fn is_valid(&self) -> bool {
        let size = self.size();
        let mut attacks = AttackSet::new(size);

        for (row, cells) in self.rows().enumerate() {
            if cells.iter().filter(|cell| cell.is_queen()).count() != 1 {
                return false;
            }
            let Some(col) = self.placement.get(row).copied().flatten() else {
                return false;
            };
            if !attacks.occupy(row, col) {
                return false;
            }
        }

        true
    }
}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.placement.cmp(&other.placement))
            .then_with(|| self.worker.cmp(&other.worker))
            .then_with(|| self.cells.iter().cmp(other.cells.iter()))
    }
}
