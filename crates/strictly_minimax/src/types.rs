//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first by convention).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if this square holds `player`'s mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Pure data: the board never decides whose turn it is and never rejects a
/// configuration that could not arise in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index (0-8).
    pub fn get_index(&self, index: usize) -> Result<Square, EngineError> {
        Position::try_from(index).map(|pos| self.get(pos))
    }

    /// Overwrites the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `player`'s mark on an empty square.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::CellOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Places `player`'s mark at a raw index (0-8).
    pub fn place_index(&mut self, index: usize, player: Player) -> Result<(), EngineError> {
        self.place(Position::try_from(index)?, player)
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares.iter().filter(|s| s.is(player)).count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns true if the mark counts could arise with X moving first.
    pub fn is_balanced(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let cells: Vec<&str> = self.squares[row * 3..row * 3 + 3]
                .iter()
                .map(|sq| match sq {
                    Square::Empty => " ",
                    Square::Occupied(Player::X) => "X",
                    Square::Occupied(Player::O) => "O",
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

/// Parses nine significant characters in row-major order.
///
/// `X`/`x` and `O`/`o` are marks, `.`, `_` and `-` are empty squares.
/// Whitespace, `|` and `/` are ignored so rows may be separated freely.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut filled = 0;
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => {
                    return Err(EngineError::MalformedBoard(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            if filled == 9 {
                return Err(EngineError::MalformedBoard(
                    "more than 9 squares".to_string(),
                ));
            }
            squares[filled] = square;
            filled += 1;
        }
        if filled != 9 {
            return Err(EngineError::MalformedBoard(format!(
                "expected 9 squares, found {}",
                filled
            )));
        }
        Ok(Self::from_squares(squares))
    }
}
