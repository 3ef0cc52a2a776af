//! Error types for board operations
//!
//! Every misuse of the board is a local, recoverable condition. Callers are
//! expected to ask first (`is_playable`, `test_win`); when they don't, the
//! operation is rejected with one of these instead of touching the bit planes.

use thiserror::Error;

/// Errors that can occur when querying or mutating a [`Board`](crate::Board)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell query outside the playable grid
    #[error("cell (row {row}, col {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// Column index past the right edge
    #[error("column {column} is out of range")]
    ColumnOutOfRange { column: usize },

    /// Column has no free cell left
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    /// Undo requested on an empty history
    #[error("no move to undo")]
    NoMoveToUndo,

    /// Winning line requested while no line of four exists at the last move
    #[error("no winning line on the board")]
    MarkersRequestedWithoutWin,

    /// Bad character in a move string
    #[error("invalid move string at position {position}: '{found}'")]
    ParseMove { position: usize, found: char },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
