//! Error types for construction, gameplay and persistence.

use thiserror::Error;

use crate::cards::Position;
use crate::rules::Phase;

/// Errors raised while building a board. Fatal for the attempted construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The symbol pool has fewer distinct symbols than the board needs pairs.
    #[error("need {required} distinct symbols, pool has {available}")]
    InsufficientSymbols { required: usize, available: usize },

    /// Restored card data does not cover the board exactly.
    #[error("board is {expected} cards but got {symbols} symbols and {flags} matched flags")]
    DimensionMismatch {
        expected: usize,
        symbols: usize,
        flags: usize,
    },

    /// Dimensions out of bounds, odd card count, or fewer than four cards.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// A rejected intent. Engine state is untouched; the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAction {
    /// The intent is not accepted in the current phase.
    #[error("not allowed while {0}")]
    WrongState(Phase),

    /// The position lies outside the grid.
    #[error("{0} is outside the board")]
    OutOfBounds(Position),

    /// The card is already face-up or matched.
    #[error("card at {0} is already face-up")]
    NoopSelection(Position),
}

/// Errors from saving or loading a game.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Bytes decrypted fine but do not describe a valid game.
    #[error("malformed save data: {0}")]
    MalformedData(String),

    /// Wrong key or tampered/corrupted ciphertext.
    #[error("save file failed authentication (wrong key or corrupted file)")]
    AuthenticationFailed,

    /// Key file exists but is not a valid key.
    #[error("invalid key file: {0}")]
    InvalidKey(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConstructionError> for PersistenceError {
    fn from(err: ConstructionError) -> Self {
        PersistenceError::MalformedData(err.to_string())
    }
}

impl From<bincode::Error> for PersistenceError {
    fn from(err: bincode::Error) -> Self {
        PersistenceError::MalformedData(err.to_string())
    }
}

/// Result type for board construction.
pub type BuildResult<T> = Result<T, ConstructionError>;

/// Result type for gameplay intents.
pub type ActionResult<T> = Result<T, InvalidAction>;

/// Result type for save/load operations.
pub type PersistResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConstructionError::InsufficientSymbols {
            required: 9,
            available: 4,
        };
        assert_eq!(err.to_string(), "need 9 distinct symbols, pool has 4");

        let err = InvalidAction::OutOfBounds(Position::new(5, 0));
        assert_eq!(err.to_string(), "(5, 0) is outside the board");

        let err = InvalidAction::WrongState(Phase::GameOver);
        assert_eq!(err.to_string(), "not allowed while game over");
    }

    #[test]
    fn test_construction_error_becomes_malformed_data() {
        let err: PersistenceError = ConstructionError::InvalidDimensions {
            width: 3,
            height: 3,
        }
        .into();
        assert!(matches!(err, PersistenceError::MalformedData(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PersistenceError = io.into();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
