//! Error types for encoding, solving and decoding N-queens instances

use thiserror::Error;

/// Result type for the library layer
pub type Result<T> = std::result::Result<T, QueensError>;

/// Errors that can occur while building or solving a puzzle
#[derive(Debug, Error)]
pub enum QueensError {
    /// Board size is not a usable queen count
    #[error("invalid board size {size}: {reason}")]
    InvalidBoardSize { size: i64, reason: String },

    /// Board size input could not be read as an integer
    #[error("board size must be an integer, got {input:?}")]
    NotAnInteger { input: String },

    /// Solver returned a variable that does not name a cell
    #[error("variable {variable} is out of range for a {size}x{size} board")]
    VariableOutOfRange { variable: i32, size: usize },

    /// Backend failed to produce a definite answer
    #[error("{backend} solver failed: {message}")]
    Solver { backend: String, message: String },

    /// A model decoded to a placement that breaks the puzzle rules
    #[error("solver model is not a valid placement: {message}")]
    InvalidModel { message: String },
}

impl QueensError {
    pub fn invalid_size(size: i64, reason: impl Into<String>) -> Self {
        QueensError::InvalidBoardSize {
            size,
            reason: reason.into(),
        }
    }

    pub fn solver(backend: impl Into<String>, message: impl Into<String>) -> Self {
        QueensError::Solver {
            backend: backend.into(),
            message: message.into(),
        }
    }
}
