//! Win detection logic for tic-tac-toe.

use crate::lines::WIN_LINES;
use crate::types::{Board, Player, Square};

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WIN_LINES`] order whose
/// three squares hold the same mark, `None` otherwise. A malformed board with
/// several completed lines reports whichever comes first in the table.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}
