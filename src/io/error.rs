//! Error types for configuration, search workers and output

use std::fmt;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum NQueensError {
    /// Board size rejected at the configuration boundary
    InvalidBoardSize {
        /// Value as supplied by the caller
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operating system refused to start a search worker
    WorkerSpawn {
        /// Row-0 column assigned to the worker
        column: usize,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A search worker panicked before finishing
    ///
    /// Reported after every worker has been joined, so the remaining
    /// workers are never left running.
    WorkerPanicked {
        /// Row-0 column assigned to the first failed worker
        column: usize,
        /// Panic payload rendered as text
        message: String,
        /// Total number of workers that failed
        failed: usize,
    },

    /// Installing the interrupt handler failed
    SignalHandler {
        /// Underlying handler error
        source: ctrlc::Error,
    },

    /// Writing the rendered report failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for NQueensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize { value, reason } => {
                write!(f, "Invalid board size: {value}. {reason}")
            }
            Self::WorkerSpawn { column, source } => {
                write!(f, "Failed to start worker for column {column}: {source}")
            }
            Self::WorkerPanicked {
                column,
                message,
                failed,
            } => {
                write!(
                    f,
                    "Worker for column {column} panicked: {message} ({failed} worker(s) failed)"
                )
            }
            Self::SignalHandler { source } => {
                write!(f, "Failed to install interrupt handler: {source}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for NQueensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WorkerSpawn { source, .. } | Self::Output { source } => Some(source),
            Self::SignalHandler { source } => Some(source),
            Self::InvalidBoardSize { .. } | Self::WorkerPanicked { .. } => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, NQueensError>;

impl From<std::io::Error> for NQueensError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<ctrlc::Error> for NQueensError {
    fn from(err: ctrlc::Error) -> Self {
        Self::SignalHandler { source: err }
    }
}

/// Create an invalid board size error
pub fn invalid_board_size(value: &impl ToString, reason: &impl ToString) -> NQueensError {
    NQueensError::InvalidBoardSize {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Render a worker panic payload as text
///
/// Panics raised with a string literal or a formatted message are shown
/// verbatim; any other payload type gets a generic description.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
