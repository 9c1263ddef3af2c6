//! Error types for the mnkgame crate

use thiserror::Error;

use crate::game::Player;

/// Main error type for the mnkgame crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,

    #[error("board is full after {moves} moves")]
    BoardFull { moves: usize },

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("rollback index {index} is beyond the {recorded} recorded moves")]
    RollbackOutOfRange { index: usize, recorded: usize },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("engine plays {engine} but it is {to_move} to move")]
    EngineOutOfTurn { engine: Player, to_move: Player },

    #[error("board text row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("board text has {got} rows, expected {expected}")]
    InvalidRowCount { got: usize, expected: usize },

    #[error("invalid character '{character}' at row {row}, column {col} of board text")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("move text '{text}' is not a 'row,col' pair")]
    InvalidMoveText { text: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
