//! Mutable working board used by a single search worker
//!
//! The board is a dense N×N grid of cells. During a search the first `row`
//! rows hold exactly one queen each and every later row is empty; the
//! engine places and removes queens in place while backtracking.

use ndarray::{Array2, ArrayView1};
use std::fmt;

use crate::io::configuration::{EMPTY_MARKER, QUEEN_MARKER};
use crate::spatial::solution::Solution;

/// Contents of a single board square
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    /// No queen on this square
    #[default]
    Empty,
    /// A queen occupies this square
    Queen,
}

impl Cell {
    /// Check whether the square holds a queen
    pub const fn is_queen(self) -> bool {
        matches!(self, Self::Queen)
    }

    /// Character used when rendering the square
    pub const fn marker(self) -> char {
        match self {
            Self::Empty => EMPTY_MARKER,
            Self::Queen => QUEEN_MARKER,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Square board of cells owned by exactly one worker at a time
///
/// A board may carry the row-0 column of the worker that owns it. The tag is
/// copied into every [`Solution`] captured from the board, which lets callers
/// confirm that no worker ever touched another worker's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
    worker: Option<usize>,
}

impl Board {
    /// Create an empty, untagged board
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::default((size, size)),
            worker: None,
        }
    }

    /// Create an empty board owned by the worker assigned to `column`
    pub fn for_worker(size: usize, column: usize) -> Self {
        Self {
            worker: Some(column),
            ..Self::new(size)
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Row-0 column of the owning worker, if the board is tagged
    pub const fn worker(&self) -> Option<usize> {
        self.worker
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Check whether a queen sits at `(row, col)`
    ///
    /// Out-of-bounds positions are reported as empty
    pub fn is_queen(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_queen)
    }

    /// Put a queen at `(row, col)`
    ///
    /// Returns `false` without touching the board if the position is out of bounds
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        self.set(row, col, Cell::Queen)
    }

    /// Clear `(row, col)`
    ///
    /// Returns `false` without touching the board if the position is out of bounds
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        self.set(row, col, Cell::Empty)
    }

    fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.cells.get_mut((row, col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// View of a single row
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, Cell>> {
        (row < self.size()).then(|| self.cells.row(row))
    }

    /// View of a single column
    pub fn column(&self, col: usize) -> Option<ArrayView1<'_, Cell>> {
        (col < self.size()).then(|| self.cells.column(col))
    }

    /// Positions of every queen in row-major order
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_queen())
            .map(|(position, _)| position)
    }

    /// Number of queens currently on the board
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_queen()).count()
    }

    /// Capture an independent copy of the current placement
    ///
    /// The working board keeps being mutated while backtracking, so the
    /// snapshot owns its own cells.
    pub fn snapshot(&self) -> Solution {
        Solution::from_cells(self.cells.clone(), self.worker)
    }
}
