//! Error types.

use crate::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move rejected by `Board::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveError {
    /// A coordinate lies outside `[0, 3)`.
    #[display("Move ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Move),
}

/// Failure to parse a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_messages() {
        let err = IllegalMoveError::OutOfBounds { row: 3, col: 0 };
        assert_eq!(err.to_string(), "Move (3, 0) is off the board");

        let err = IllegalMoveError::Occupied(Move::new(1, 1));
        assert_eq!(err.to_string(), "Cell (1, 1) is already occupied");
    }

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("boom");
        assert_eq!(err.message, "boom");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
