//! The eight winning lines and per-line mark counts.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Winning lines in table order: rows, then columns, then diagonals.
///
/// Every "first found" rule in the engine refers to this order.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Contents of one line as seen by `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    /// Marks belonging to the player.
    pub own: u8,
    /// Marks belonging to the opponent.
    pub opponent: u8,
    /// Empty squares.
    pub empty: u8,
    /// Lowest-index empty square in the line, if any.
    pub first_empty: Option<Position>,
}

impl LineCounts {
    /// Counts the marks of `line` from `player`'s point of view.
    pub fn of(board: &Board, line: &[Position; 3], player: Player) -> Self {
        let mut counts = Self {
            own: 0,
            opponent: 0,
            empty: 0,
            first_empty: None,
        };
        for &pos in line {
            match board.get(pos) {
                Square::Empty => {
                    counts.empty += 1;
                    counts.first_empty = Some(counts.first_empty.map_or(pos, |p| p.min(pos)));
                }
                Square::Occupied(p) if p == player => counts.own += 1,
                Square::Occupied(_) => counts.opponent += 1,
            }
        }
        counts
    }

    /// Two of the player's marks and one empty square: wins next move.
    pub fn is_open_two(&self) -> bool {
        self.own == 2 && self.empty == 1
    }

    /// One of the player's marks and two empty squares.
    pub fn is_open_one(&self) -> bool {
        self.own == 1 && self.empty == 2
    }
}
