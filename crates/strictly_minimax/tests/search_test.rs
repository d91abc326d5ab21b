//! Tests for the minimax search contract.

use strictly_minimax::{
    Board, Player, Position, SCORE_DRAW, SCORE_X_WINS, legal_moves, minimax, minimax_with_stats,
    move_score, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_is_a_draw() {
    let result = minimax(&Board::new(), Player::X);
    assert_eq!(*result.score(), SCORE_DRAW);
    // Every opening move holds the draw.
    assert_eq!(result.moves(), &Position::ALL.to_vec());
}

#[test]
fn test_x_three_in_a_row_is_terminal() {
    let b = board("XXX OO. ...");
    assert_eq!(winner(&b), Some(Player::X));

    let (result, stats) = minimax_with_stats(&b, Player::O);
    assert_eq!(*result.score(), SCORE_X_WINS);
    assert!(result.moves().is_empty());
    assert_eq!(stats.nodes, 1);
}

#[test]
fn test_search_does_not_mutate_board() {
    let b = board("X.. .O. ..X");
    let before = b;
    let _ = minimax(&b, Player::O);
    assert_eq!(b, before);
}

#[test]
fn test_tie_set_is_complete() {
    // X at 0 and 4, O at 1, X to move.
    let b = board("XO. .X. ...");
    let result = minimax(&b, Player::X);
    assert_eq!(*result.score(), SCORE_X_WINS);

    for pos in legal_moves(&b) {
        let score = move_score(&b, Player::X, pos).expect("empty square");
        assert_eq!(
            result.contains(pos),
            score == SCORE_X_WINS,
            "{} scored {}",
            pos,
            score
        );
    }

    let indices: Vec<usize> = result.moves().iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, vec![2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_search_is_idempotent() {
    let b = board("X.. .O. ...");
    assert_eq!(minimax(&b, Player::X), minimax(&b, Player::X));
}

#[test]
fn test_o_can_win_from_x_mistake() {
    // X ignored O's diagonal threat; O completes it at 8.
    let b = board("OX. XO. X..");
    let result = minimax(&b, Player::O);
    assert_eq!(*result.score(), -1);
    assert!(result.contains(Position::BottomRight));
}

#[test]
fn test_moves_are_sorted_and_unique() {
    let b = board("X.. ... ...");
    let result = minimax(&b, Player::X);
    let moves = result.moves();
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
}
