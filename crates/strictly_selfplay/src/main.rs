//! Strictly Selfplay - CLI
//!
//! Plays the engine against itself and prints every board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_minimax::{GameOutcome, Player, SeededRng};
use strictly_selfplay::{MatchConfig, play_match};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_match_config(&cli)?;
    let mut rng = match config.seed() {
        Some(seed) => SeededRng::new(*seed),
        None => SeededRng::from_entropy(),
    };
    info!(seed = rng.seed(), games = cli.games, "Starting self-play");

    let mut tally = Tally::default();
    for game_no in 1..=cli.games {
        let mut game_rng = rng.fork();
        if cli.games > 1 && !cli.quiet {
            println!("=== Game {} ===", game_no);
        }
        let report = play_match(&config, &mut game_rng, |game, ply| {
            if !cli.quiet {
                println!("{}", ply);
                println!("{}", game.board());
            }
        })?;
        println!("{}", report.outcome());
        tally.record(*report.outcome());
    }

    if cli.games > 1 {
        println!(
            "X wins: {}, O wins: {}, draws: {}",
            tally.x_wins, tally.o_wins, tally.draws
        );
    }

    Ok(())
}

/// Loads the config file if present and applies command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_match_config(cli: &Cli) -> Result<MatchConfig> {
    let mut config = if cli.config.exists() {
        MatchConfig::from_file(&cli.config)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            cli.config.display()
        );
        MatchConfig::default()
    };

    if let Some(preset) = cli.x_policy {
        config = config.with_x(preset.config());
    }
    if let Some(preset) = cli.o_policy {
        config = config.with_o(preset.config());
    }
    if let Some(square) = cli.x_opens {
        let opening = config.opening().with_x_first_move(Some(square.to_index()));
        config = config.with_opening(opening);
    }
    if cli.random_o_opening {
        config = config.with_opening(config.opening().with_o_random_non_center(true));
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }

    Ok(config)
}

/// Results across all games.
#[derive(Debug, Default)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Player::X) => self.x_wins += 1,
            GameOutcome::Won(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }
}
