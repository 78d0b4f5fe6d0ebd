//! Error type shared by board construction, configuration and direction parsing.
//!
//! The move engine itself is total over a validated board, so errors only
//! surface at the edges: building a board from raw rows, validating a
//! `GameConfig`, or converting an integer/string into a `Direction`.

use thiserror::Error;

/// Errors raised when input violates the engine's preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board must be at least 2x2.
    #[error("board size {size} is too small (minimum is 2)")]
    BoardTooSmall { size: usize },

    /// A row does not have as many cells as the board has rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A snapshot declares a size its grid does not have.
    #[error("declared size {declared} does not match {actual}x{actual} board")]
    SizeMismatch { declared: usize, actual: usize },

    /// A non-empty cell that is not a power of two >= 2.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Integer direction code outside 0..=3.
    #[error("invalid direction code {0}")]
    InvalidDirection(u8),

    /// Direction name that is not up/down/left/right.
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
