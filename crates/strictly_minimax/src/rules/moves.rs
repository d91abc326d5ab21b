//! Legal move enumeration.

use crate::position::Position;
use crate::types::Board;

/// All empty squares in ascending index order.
///
/// The order is part of the contract: "first move" tie-breaks and the
/// tactical scans depend on it. A board that has already been won still
/// reports its empty squares; callers check the outcome first.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_valid_moves_empty_board() {
        assert_eq!(legal_moves(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_valid_moves_filters_occupied_and_stays_sorted() {
        let mut board = Board::new();
        board.place(Position::BottomRight, Player::X).unwrap();
        board.place(Position::TopLeft, Player::O).unwrap();
        board.place(Position::Center, Player::X).unwrap();

        let moves = legal_moves(&board);
        assert_eq!(
            moves.iter().map(|p| p.to_index()).collect::<Vec<_>>(),
            vec![1, 2, 3, 5, 6, 7]
        );
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }
}
