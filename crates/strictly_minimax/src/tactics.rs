//! One-ply tactical checks used to skip the full search.
//!
//! Each check scans the winning lines once and never calls into the search.
//! They are approximations: only [`crate::search::minimax`] is authoritative
//! about optimal play.

use crate::lines::{LineCounts, WIN_LINES};
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::{instrument, trace};

/// Number of live lines a placement must leave behind to count as a fork.
pub const FORK_THRESHOLD: usize = 2;

/// First square that completes a line for `player`.
///
/// Looks for a line with two of `player`'s marks and one empty square,
/// scanning lines in table order.
#[instrument(skip(board))]
pub fn find_immediate_win(board: &Board, player: Player) -> Option<Position> {
    WIN_LINES
        .iter()
        .map(|line| LineCounts::of(board, line, player))
        .find(LineCounts::is_open_two)
        .and_then(|counts| counts.first_empty)
}

/// Square `player` must take to stop the opponent winning next move.
///
/// Only the opponent's threats are considered; whether `player` could win
/// outright instead is [`find_immediate_win`]'s question.
#[instrument(skip(board))]
pub fn find_forced_block(board: &Board, player: Player) -> Option<Position> {
    find_immediate_win(board, player.opponent())
}

/// First empty square (ascending) that leaves `player` with at least
/// [`FORK_THRESHOLD`] live lines.
///
/// After a hypothetical placement every line is counted that holds two of
/// `player`'s marks and one empty square, or one mark and two empty squares.
/// The second kind is only a developing threat, so this over-reports forks.
#[instrument(skip(board))]
pub fn find_fork(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = *board;
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(player));
        let live = live_lines(&scratch, player);
        scratch.clear(pos);

        if live >= FORK_THRESHOLD {
            return Some(pos);
        }
        trace!(position = %pos, live, "No fork");
    }
    None
}

/// Lines that are either one move from completion or open with one mark.
pub fn live_lines(board: &Board, player: Player) -> usize {
    WIN_LINES
        .iter()
        .map(|line| LineCounts::of(board, line, player))
        .filter(|counts| counts.is_open_two() || counts.is_open_one())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_completes_row() {
        let b = board("XX. OO. ...");
        assert_eq!(find_immediate_win(&b, Player::X), Some(Position::TopRight));
        assert_eq!(find_immediate_win(&b, Player::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_immediate_win_fills_gap_in_line() {
        let b = board("X.. ... ..X");
        assert_eq!(find_immediate_win(&b, Player::X), Some(Position::Center));
    }

    #[test]
    fn test_immediate_win_prefers_table_order() {
        // Column 0 would win at 6, but the top row comes first in the table.
        let b = board("XX. X.. ...");
        assert_eq!(find_immediate_win(&b, Player::X), Some(Position::TopRight));
    }

    #[test]
    fn test_blocked_line_is_not_a_win() {
        let b = board("XXO ... ...");
        assert_eq!(find_immediate_win(&b, Player::X), None);
    }

    #[test]
    fn test_forced_block_ignores_own_threat() {
        let b = board("XX. OO. ...");
        assert_eq!(find_forced_block(&b, Player::O), Some(Position::TopRight));
        assert_eq!(find_forced_block(&b, Player::X), Some(Position::MiddleRight));
    }

    #[test]
    fn test_no_block_needed() {
        let b = board("X.. .O. ...");
        assert_eq!(find_forced_block(&b, Player::O), None);
    }

    #[test]
    fn test_fork_on_empty_board_is_first_square() {
        // A corner opens three lines on an empty board.
        assert_eq!(find_fork(&Board::new(), Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_fork_counts_developing_lines() {
        // After X at 0, X at 1 leaves column 0, column 1 and the diagonal open.
        let b = board("X.. ... ...");
        assert_eq!(find_fork(&b, Player::X), Some(Position::TopCenter));
    }

    #[test]
    fn test_fork_skips_dead_squares() {
        // X at 1, 3 or 5 adds nothing beyond the open right column; 6 also
        // opens the bottom row.
        let b = board("O.X .O. ...");
        assert_eq!(live_lines(&b, Player::X), 1);
        assert_eq!(find_fork(&b, Player::X), Some(Position::BottomLeft));
    }

    #[test]
    fn test_no_fork_when_everything_is_blocked() {
        let b = board("XOX OXO O.O");
        assert_eq!(find_fork(&b, Player::X), None);
    }

    #[test]
    fn test_fork_leaves_board_untouched() {
        let b = board("X.O .X. ...");
        let before = b;
        let _ = find_fork(&b, Player::O);
        assert_eq!(b, before);
    }
}
