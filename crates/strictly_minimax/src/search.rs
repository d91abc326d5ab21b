//! Exhaustive minimax search.
//!
//! Scores are always stated from X's point of view: `+1` means X wins with
//! perfect play, `-1` means O wins, `0` is a draw. The search returns every
//! move that achieves the best score for the side to move; choosing one of
//! them is the move policy's job.

use crate::error::EngineError;
use crate::position::Position;
use crate::rules::{is_full, legal_moves, winner};
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// X wins with perfect play.
pub const SCORE_X_WINS: i8 = 1;
/// Perfect play from both sides draws.
pub const SCORE_DRAW: i8 = 0;
/// O wins with perfect play.
pub const SCORE_O_WINS: i8 = -1;

/// Value of a position plus every move that attains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game-theoretic value from X's perspective.
    score: i8,
    /// All optimal moves for the side to move, ascending. Empty at terminal
    /// positions.
    moves: Vec<Position>,
}

impl SearchResult {
    fn terminal(score: i8) -> Self {
        Self {
            score,
            moves: Vec::new(),
        }
    }

    /// Lowest-index optimal move.
    pub fn first_move(&self) -> Option<Position> {
        self.moves.first().copied()
    }

    /// True when the position was already decided and there is nothing to play.
    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }

    /// True if `pos` is one of the optimal moves.
    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains(&pos)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, root included.
    pub nodes: u64,
    /// Positions that were already won or drawn.
    pub terminal_nodes: u64,
    /// Deepest ply reached below the root.
    pub max_depth: u8,
}

/// Score of a decided board, `None` while the game is still open.
pub fn terminal_score(board: &Board) -> Option<i8> {
    match winner(board) {
        Some(Player::X) => Some(SCORE_X_WINS),
        Some(Player::O) => Some(SCORE_O_WINS),
        None if is_full(board) => Some(SCORE_DRAW),
        None => None,
    }
}

/// Runs the search on a private copy of the caller's board.
///
/// Each exploratory mark is removed before the recursive call that placed it
/// returns, so the copy is back in its starting state when the search ends.
#[derive(Debug, Clone)]
pub struct Searcher {
    board: Board,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher over a copy of `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            board: *board,
            stats: SearchStats::default(),
        }
    }

    /// Evaluates the position with `side_to_move` on move.
    pub fn run(mut self, side_to_move: Player) -> (SearchResult, SearchStats) {
        let start = self.board;
        let result = self.root(side_to_move);
        debug_assert_eq!(self.board, start, "search left a mark on the board");
        (result, self.stats)
    }

    fn root(&mut self, side: Player) -> SearchResult {
        self.stats.nodes += 1;
        if let Some(score) = terminal_score(&self.board) {
            self.stats.terminal_nodes += 1;
            return SearchResult::terminal(score);
        }

        let mut best = worst_for(side);
        let mut moves = Vec::new();
        for pos in legal_moves(&self.board) {
            let score = self.try_move(pos, side, 1);
            if improves(side, score, best) {
                best = score;
                moves.clear();
                moves.push(pos);
            } else if score == best {
                moves.push(pos);
            }
        }

        SearchResult { score: best, moves }
    }

    fn score(&mut self, side: Player, depth: u8) -> i8 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if let Some(score) = terminal_score(&self.board) {
            self.stats.terminal_nodes += 1;
            return score;
        }

        let mut best = worst_for(side);
        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }
            let score = self.try_move(pos, side, depth + 1);
            if improves(side, score, best) {
                best = score;
            }
        }
        best
    }

    fn try_move(&mut self, pos: Position, side: Player, depth: u8) -> i8 {
        self.board.set(pos, Square::Occupied(side));
        let score = self.score(side.opponent(), depth);
        self.board.clear(pos);
        score
    }
}

fn worst_for(side: Player) -> i8 {
    match side {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    }
}

fn improves(side: Player, candidate: i8, best: i8) -> bool {
    match side {
        Player::X => candidate > best,
        Player::O => candidate < best,
    }
}

/// Computes the value of `board` and every optimal move for `side_to_move`.
///
/// The caller's board is never modified.
#[instrument(skip(board), fields(board = %compact(board)))]
pub fn minimax(board: &Board, side_to_move: Player) -> SearchResult {
    minimax_with_stats(board, side_to_move).0
}

/// Like [`minimax`], also returning search counters.
pub fn minimax_with_stats(board: &Board, side_to_move: Player) -> (SearchResult, SearchStats) {
    let (result, stats) = Searcher::new(board).run(side_to_move);
    debug!(
        side = %side_to_move,
        score = result.score,
        moves = ?result.moves,
        nodes = stats.nodes,
        "Search complete"
    );
    (result, stats)
}

/// Value (X's perspective) of `side_to_move` playing at `pos`.
///
/// # Errors
///
/// Returns `EngineError::CellOccupied` if `pos` already holds a mark.
#[instrument(skip(board))]
pub fn move_score(board: &Board, side_to_move: Player, pos: Position) -> Result<i8, EngineError> {
    let mut next = *board;
    next.place(pos, side_to_move)?;
    Ok(*minimax(&next, side_to_move.opponent()).score())
}

fn compact(board: &Board) -> String {
    board.squares().iter().map(square_char).collect()
}

fn square_char(square: &Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}
