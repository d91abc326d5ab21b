//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: every square occupied and nobody has three in a row.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
