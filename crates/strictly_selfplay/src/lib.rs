//! Strictly Selfplay - drives the strictly_minimax engine through whole games
//!
//! The engine answers one question per turn; this crate owns everything
//! around it: the board between turns, scripted openings, the turn loop and
//! the match configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod runner;

// Crate-level exports - Configuration
pub use config::{MatchConfig, OpeningConfig};

// Crate-level exports - Errors
pub use error::MatchError;

// Crate-level exports - Game loop
pub use game::Game;
pub use runner::{MatchReport, Ply, PlySource, play_match};
