//! Game state owned by the self-play loop.

use crate::error::MatchError;
use strictly_minimax::{Board, GameOutcome, Player, Position, outcome};
use tracing::instrument;

/// A game in progress: the board, whose turn it is, and what has been played.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
    status: GameOutcome,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            status: GameOutcome::Ongoing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.status
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// # Errors
    ///
    /// `MatchError::GameOver` once the game has ended, `MatchError::Engine`
    /// if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MatchError> {
        if self.status != GameOutcome::Ongoing {
            return Err(MatchError::GameOver);
        }

        self.board.place(pos, self.to_move)?;
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        self.status = outcome(&self.board);

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::EngineError;

    #[test]
    fn test_moves_alternate() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.make_move(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let err = game.make_move(Position::Center).unwrap_err();
        assert!(matches!(
            err,
            MatchError::Engine(EngineError::CellOccupied(Position::Center))
        ));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.outcome(), GameOutcome::Won(Player::X));
        assert!(matches!(
            game.make_move(Position::BottomRight),
            Err(MatchError::GameOver)
        ));
    }
}
