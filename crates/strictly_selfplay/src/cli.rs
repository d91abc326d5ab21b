//! Command-line interface for strictly_selfplay.

use clap::{Parser, ValueEnum};
use strictly_minimax::{PolicyConfig, Position, TieBreak};

/// Strictly Selfplay - watch the minimax engine play itself
#[derive(Parser, Debug)]
#[command(name = "strictly_selfplay")]
#[command(about = "Self-play driver for the strictly_minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a match configuration file (TOML)
    #[arg(short, long, default_value = "selfplay.toml")]
    pub config: std::path::PathBuf,

    /// Number of games to play
    #[arg(short = 'n', long, default_value = "1")]
    pub games: u32,

    /// Seed for tie-breaks and random openings (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Policy for X (overrides the config file)
    #[arg(long, value_enum)]
    pub x_policy: Option<PolicyPreset>,

    /// Policy for O (overrides the config file)
    #[arg(long, value_enum)]
    pub o_policy: Option<PolicyPreset>,

    /// Square X opens on, by index (0-8) or label such as "center"
    /// (overrides the config file)
    #[arg(long, value_parser = parse_square)]
    pub x_opens: Option<Position>,

    /// O answers X's opening with a random non-center square
    #[arg(long)]
    pub random_o_opening: bool,

    /// Print only results, not boards
    #[arg(short, long)]
    pub quiet: bool,
}

/// Named policies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyPreset {
    /// Exhaustive search, first optimal move
    Search,
    /// Win, block and fork shortcuts in front of the search
    Heuristics,
    /// Exhaustive search, random optimal move
    RandomSearch,
}

impl PolicyPreset {
    /// The policy this preset stands for.
    pub fn config(self) -> PolicyConfig {
        match self {
            PolicyPreset::Search => PolicyConfig::search_only(),
            PolicyPreset::Heuristics => PolicyConfig::all_heuristics(),
            PolicyPreset::RandomSearch => {
                PolicyConfig::search_only().with_tie_break(TieBreak::UniformRandom)
            }
        }
    }
}

/// Parses a square given by index or label.
pub fn parse_square(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a square (0-8 or a label like top-left)", s))
}
