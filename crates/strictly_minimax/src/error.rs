//! Error types for the engine.
//!
//! Every variant is a precondition failure on the caller's side. The engine
//! has no I/O and nothing to retry.

use crate::position::Position;

/// Error raised when the caller hands the engine something it cannot use.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidCell(usize),

    /// Placement on a square that already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// A move was requested on a board with no empty squares.
    #[display("No legal moves: the board is full")]
    NoLegalMoves,

    /// Board text could not be parsed.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),
}

impl std::error::Error for EngineError {}
