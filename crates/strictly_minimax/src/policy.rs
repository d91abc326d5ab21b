//! Move policy: tactical shortcuts in front of the search.
//!
//! [`choose_move`] is the single decision entry point for a caller that owns
//! the game loop. It tries the enabled shortcuts in fixed priority
//! (immediate win, forced block, fork) and falls back to [`minimax`], whose
//! tie set is reduced to one move by the configured [`TieBreak`].

use crate::config::{PolicyConfig, TieBreak};
use crate::error::EngineError;
use crate::position::Position;
use crate::rng::ChoiceSource;
use crate::rules::legal_moves;
use crate::search::minimax;
use crate::tactics::{find_forced_block, find_fork, find_immediate_win};
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which layer of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum DecisionSource {
    /// Completed one of the mover's lines.
    #[display("immediate win")]
    ImmediateWin,
    /// Blocked the opponent's line.
    #[display("forced block")]
    ForcedBlock,
    /// Fork heuristic.
    #[display("fork")]
    Fork,
    /// Full search; `score` is the position value from X's perspective.
    #[display("search (score {})", score)]
    Search {
        /// Value of the position.
        score: i8,
        /// Number of equally good moves the tie-break chose from.
        candidates: usize,
    },
}

/// A chosen move and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveDecision {
    /// Square to play.
    position: Position,
    /// Policy layer that chose it.
    source: DecisionSource,
}

impl std::fmt::Display for MoveDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.position.to_index(), self.source)
    }
}

/// Chooses the square for `player` to play.
///
/// # Errors
///
/// Returns `EngineError::NoLegalMoves` if the board has no empty square.
pub fn choose_move<C>(
    board: &Board,
    player: Player,
    config: &PolicyConfig,
    chooser: &mut C,
) -> Result<Position, EngineError>
where
    C: ChoiceSource + ?Sized,
{
    decide(board, player, config, chooser).map(|decision| decision.position)
}

/// Like [`choose_move`], also reporting which layer produced the move.
///
/// # Errors
///
/// Returns `EngineError::NoLegalMoves` if the board has no empty square.
#[instrument(skip(board, chooser))]
pub fn decide<C>(
    board: &Board,
    player: Player,
    config: &PolicyConfig,
    chooser: &mut C,
) -> Result<MoveDecision, EngineError>
where
    C: ChoiceSource + ?Sized,
{
    if legal_moves(board).is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    if !board.is_balanced() {
        warn!(
            x = board.count(Player::X),
            o = board.count(Player::O),
            "Mark counts cannot arise with X moving first"
        );
    }

    let decision = shortcut(board, player, config)
        .map(|(position, source)| MoveDecision { position, source })
        .unwrap_or_else(|| searched(board, player, config.tie_break, chooser));

    debug!(position = %decision.position, source = %decision.source, "Move chosen");
    Ok(decision)
}

fn shortcut(
    board: &Board,
    player: Player,
    config: &PolicyConfig,
) -> Option<(Position, DecisionSource)> {
    if config.use_immediate_win
        && let Some(pos) = find_immediate_win(board, player)
    {
        return Some((pos, DecisionSource::ImmediateWin));
    }
    if config.use_forced_block
        && let Some(pos) = find_forced_block(board, player)
    {
        return Some((pos, DecisionSource::ForcedBlock));
    }
    if config.use_fork
        && let Some(pos) = find_fork(board, player)
    {
        return Some((pos, DecisionSource::Fork));
    }
    None
}

fn searched<C>(board: &Board, player: Player, tie_break: TieBreak, chooser: &mut C) -> MoveDecision
where
    C: ChoiceSource + ?Sized,
{
    let result = minimax(board, player);
    let moves = result.moves();
    let candidates = moves.len();

    // A decided board with empty squares left still needs an answer.
    let position = if moves.is_empty() {
        legal_moves(board)[0]
    } else {
        match tie_break {
            TieBreak::FirstMove => moves[0],
            TieBreak::UniformRandom => moves[chooser.pick(candidates).min(candidates - 1)],
        }
    };

    MoveDecision {
        position,
        source: DecisionSource::Search {
            score: *result.score(),
            candidates,
        },
    }
}
