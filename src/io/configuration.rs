//! Solver constants and validated runtime configuration

use std::num::NonZeroUsize;

use crate::io::error::{Result, invalid_board_size};

// Board size for the classic Eight Queens puzzle
/// Default board size when none is given
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Character rendered for a queen
pub const QUEEN_MARKER: char = 'Q';
/// Character rendered for an empty square
pub const EMPTY_MARKER: char = ' ';

// Command-line presentation
/// Program name shown in usage and help
pub const PROGRAM_NAME: &str = "nqueens";
/// One-line description shown in help
pub const PROGRAM_ABOUT: &str = "See solutions to the NQueens problem.";
/// Text shown after the help options
pub const PROGRAM_EPILOG: &str = "The N Queens puzzle is the problem of placing N chess queens on an N×N chessboard so that no two queens threaten each other.";
/// Text printed for `-V/--version`
pub const VERSION_STRING: &str =
    concat!("Current version of nqueens is v", env!("CARGO_PKG_VERSION"));
/// Notice printed when the user interrupts a run
pub const INTERRUPT_NOTICE: &str = "[*] Exiting Program";

/// Name prefix for worker threads, followed by the row-0 column
pub const WORKER_THREAD_PREFIX: &str = "nqueens-worker-";

// Progress bar display settings
/// Template for the worker progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Workers: [{bar:40.cyan/blue}] {pos}/{len}";

/// Immutable parameters of one search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    board_size: NonZeroUsize,
    verbose: bool,
}

impl Configuration {
    /// Validate a board size and build a configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::NQueensError::InvalidBoardSize`] if `board_size` is zero
    pub fn new(board_size: usize, verbose: bool) -> Result<Self> {
        let board_size = NonZeroUsize::new(board_size).ok_or_else(|| {
            invalid_board_size(&board_size, &"Must be a positive integer greater than 0.")
        })?;

        Ok(Self {
            board_size,
            verbose,
        })
    }

    /// Number of rows and columns on the board
    pub const fn board_size(&self) -> usize {
        self.board_size.get()
    }

    /// Whether every solution should be rendered after the search
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            board_size: NonZeroUsize::new(DEFAULT_BOARD_SIZE).unwrap_or(NonZeroUsize::MIN),
            verbose: false,
        }
    }
}

/// Parse a command-line board size
///
/// Accepts only integers greater than zero.
///
/// # Errors
///
/// Returns [`crate::NQueensError::InvalidBoardSize`] for anything else
pub fn parse_board_size(value: &str) -> Result<usize> {
    match value.trim().parse::<i128>() {
        Ok(size) if size > 0 => usize::try_from(size)
            .map_err(|_overflow| invalid_board_size(&value, &"Board size is too large.")),
        Ok(_) | Err(_) => Err(invalid_board_size(
            &value,
            &"Must be a positive integer greater than 0.",
        )),
    }
}
