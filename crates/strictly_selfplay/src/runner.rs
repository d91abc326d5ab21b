//! The self-play loop: scripted opening, then alternating engine moves.

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::game::Game;
use derive_getters::Getters;
use serde::Serialize;
use strictly_minimax::{
    Board, ChoiceSource, GameOutcome, MoveDecision, Player, Position, SeededRng, decide,
    legal_moves,
};
use tracing::{debug, info, instrument};

/// Where a ply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlySource {
    /// Scripted opening move.
    Opening,
    /// Chosen by the engine.
    Engine(MoveDecision),
}

/// One move of a finished or running match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Ply {
    /// Player who moved.
    player: Player,
    /// Square played.
    position: Position,
    /// How the square was chosen.
    source: PlySource,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            PlySource::Opening => write!(
                f,
                "{} opens at index {}:",
                self.player,
                self.position.to_index()
            ),
            PlySource::Engine(decision) => write!(
                f,
                "{} plays at index {} ({}):",
                self.player,
                self.position.to_index(),
                decision.source()
            ),
        }
    }
}

/// Result of one match.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct MatchReport {
    /// How the game ended.
    outcome: GameOutcome,
    /// Every ply in order.
    plies: Vec<Ply>,
    /// Final board.
    board: Board,
}

/// Plays one game to the end.
///
/// `on_ply` sees the game after each move is applied, which is where a
/// caller renders the board.
///
/// # Errors
///
/// Returns `MatchError::Engine` if the scripted opening names an invalid or
/// occupied square.
#[instrument(skip(config, rng, on_ply), fields(seed = rng.seed()))]
pub fn play_match<F>(
    config: &MatchConfig,
    rng: &mut SeededRng,
    mut on_ply: F,
) -> Result<MatchReport, MatchError>
where
    F: FnMut(&Game, &Ply),
{
    let mut game = Game::new();
    let mut plies = Vec::new();

    let mut record = |game: &mut Game, position: Position, source: PlySource| {
        let ply = Ply {
            player: game.to_move(),
            position,
            source,
        };
        game.make_move(position)?;
        on_ply(game, &ply);
        plies.push(ply);
        Ok::<(), MatchError>(())
    };

    if let Some(cell) = config.opening().x_first_move() {
        let position = Position::try_from(*cell)?;
        record(&mut game, position, PlySource::Opening)?;
    }

    if *config.opening().o_random_non_center()
        && game.outcome() == GameOutcome::Ongoing
        && game.to_move() == Player::O
    {
        let candidates: Vec<Position> = legal_moves(game.board())
            .into_iter()
            .filter(|pos| *pos != Position::Center)
            .collect();
        if !candidates.is_empty() {
            let position = candidates[rng.pick(candidates.len())];
            record(&mut game, position, PlySource::Opening)?;
        }
    }

    while game.outcome() == GameOutcome::Ongoing {
        let player = game.to_move();
        let decision = decide(game.board(), player, config.policy_for(player), rng)?;
        debug!(%player, %decision, "Engine move");
        record(&mut game, *decision.position(), PlySource::Engine(decision))?;
    }

    info!(outcome = %game.outcome(), plies = plies.len(), "Match finished");
    Ok(MatchReport {
        outcome: game.outcome(),
        plies,
        board: *game.board(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpeningConfig;
    use strictly_minimax::{EngineError, PolicyConfig};

    #[test]
    fn test_default_match_is_a_draw() {
        let mut rng = SeededRng::new(0);
        let report = play_match(&MatchConfig::default(), &mut rng, |_, _| {}).unwrap();
        assert_eq!(*report.outcome(), GameOutcome::Draw);
        assert_eq!(report.plies()[0].source, PlySource::Opening);
        assert_eq!(report.plies()[0].position, Position::TopLeft);
        assert_eq!(report.plies().len(), 9);
    }

    #[test]
    fn test_callback_sees_every_ply() {
        let mut rng = SeededRng::new(0);
        let mut seen = 0;
        let report = play_match(&MatchConfig::default(), &mut rng, |game, _| {
            seen += 1;
            assert_eq!(game.history().len(), seen);
        })
        .unwrap();
        assert_eq!(seen, report.plies().len());
    }

    #[test]
    fn test_invalid_opening_cell() {
        let config = MatchConfig::default()
            .with_opening(OpeningConfig::default().with_x_first_move(Some(11)));
        let mut rng = SeededRng::new(0);
        let err = play_match(&config, &mut rng, |_, _| {}).unwrap_err();
        assert!(matches!(err, MatchError::Engine(EngineError::InvalidCell(11))));
    }

    #[test]
    fn test_random_o_opening_avoids_center() {
        let config = MatchConfig::default()
            .with_x(PolicyConfig::all_heuristics())
            .with_o(PolicyConfig::all_heuristics())
            .with_opening(OpeningConfig::default().with_o_random_non_center(true));
        for seed in 0..6 {
            let mut rng = SeededRng::new(seed);
            let report = play_match(&config, &mut rng, |_, _| {}).unwrap();
            let reply = report.plies()[1];
            assert_eq!(reply.source, PlySource::Opening);
            assert_ne!(reply.position, Position::Center);
        }
    }
}
