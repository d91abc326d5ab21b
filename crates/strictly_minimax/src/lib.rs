//! Strictly Minimax - perfect-play tic-tac-toe engine
//!
//! Given a 3x3 board and the side to move, the engine finds the
//! game-theoretically optimal move by exhaustive search, optionally
//! short-circuited by cheap one-ply tactics.
//!
//! # Architecture
//!
//! - **Board**: nine squares, pure data
//! - **Rules**: winner, draw and legal-move evaluation
//! - **Search**: exhaustive minimax returning every optimal move
//! - **Tactics**: immediate win, forced block and fork shortcuts
//! - **Policy**: composes tactics and search into one move decision
//!
//! The engine never prints, never loops turns and never owns game history;
//! the caller holds the board and applies the returned move.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Player, PolicyConfig, Position, SeededRng, choose_move, minimax};
//!
//! let board: Board = "X.. ... ...".parse().unwrap();
//!
//! // Perfect play from here is a draw, and only the center holds it for O.
//! let result = minimax(&board, Player::O);
//! assert_eq!(*result.score(), 0);
//! assert_eq!(result.moves(), &vec![Position::Center]);
//!
//! let mut rng = SeededRng::new(1);
//! let pos = choose_move(&board, Player::O, &PolicyConfig::search_only(), &mut rng).unwrap();
//! assert_eq!(pos, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod lines;
mod policy;
mod position;
mod rng;
pub mod rules;
mod search;
mod tactics;
mod types;

// Crate-level exports - Board and cells
pub use lines::{LineCounts, WIN_LINES};
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{GameOutcome, is_draw, is_full, is_terminal, legal_moves, outcome, winner};

// Crate-level exports - Search
pub use search::{
    SCORE_DRAW, SCORE_O_WINS, SCORE_X_WINS, SearchResult, SearchStats, Searcher, minimax,
    minimax_with_stats, move_score, terminal_score,
};

// Crate-level exports - Tactics
pub use tactics::{FORK_THRESHOLD, find_forced_block, find_fork, find_immediate_win, live_lines};

// Crate-level exports - Policy
pub use config::{ConfigError, PolicyConfig, TieBreak};
pub use policy::{DecisionSource, MoveDecision, choose_move, decide};
pub use rng::{ChoiceSource, SeededRng};

// Crate-level exports - Errors
pub use error::EngineError;
