//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules never mutate the board and
//! never check whether the position could arise in a legal game.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::legal_moves;
pub use win::winner;

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winner yet and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Won(Player),
    /// Board full without a winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "In progress"),
            GameOutcome::Won(player) => write!(f, "The winner is: {}", player),
            GameOutcome::Draw => write!(f, "It's a draw."),
        }
    }
}

/// Evaluates the board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        GameOutcome::Won(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

/// Returns true if the game has been won or drawn.
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_variants() {
        assert_eq!(outcome(&Board::new()), GameOutcome::Ongoing);

        let won: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(outcome(&won), GameOutcome::Won(Player::O));
        assert!(is_terminal(&won));

        let drawn: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(outcome(&drawn), GameOutcome::Draw);
        assert_eq!(outcome(&drawn).winner(), None);
    }

    #[test]
    fn test_full_board_with_winner_is_won_not_drawn() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Won(Player::X));
    }
}
