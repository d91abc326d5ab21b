//! Match configuration: one policy per side plus the scripted opening.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{ConfigError, Player, PolicyConfig};
use tracing::{debug, info, instrument};

/// Scripted moves played before either engine is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    /// Cell X opens on, or `None` to let X's policy choose.
    x_first_move: Option<usize>,
    /// O answers with a random square other than the center.
    o_random_non_center: bool,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            x_first_move: Some(0),
            o_random_non_center: false,
        }
    }
}

impl OpeningConfig {
    /// Opening in which both sides leave the first move to their policy.
    pub fn unscripted() -> Self {
        Self {
            x_first_move: None,
            o_random_non_center: false,
        }
    }

    /// Set X's first move.
    pub fn with_x_first_move(mut self, cell: Option<usize>) -> Self {
        self.x_first_move = cell;
        self
    }

    /// Set whether O opens on a random non-center square.
    pub fn with_o_random_non_center(mut self, enabled: bool) -> Self {
        self.o_random_non_center = enabled;
        self
    }
}

/// Configuration for a self-play match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Policy playing X.
    x: PolicyConfig,
    /// Policy playing O.
    o: PolicyConfig,
    /// Scripted opening.
    opening: OpeningConfig,
    /// Seed for tie-breaks and the random opening; fresh entropy when absent.
    seed: Option<u64>,
}

impl MatchConfig {
    /// Policy for the given side.
    pub fn policy_for(&self, player: Player) -> &PolicyConfig {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Set X's policy.
    pub fn with_x(mut self, policy: PolicyConfig) -> Self {
        self.x = policy;
        self
    }

    /// Set O's policy.
    pub fn with_o(mut self, policy: PolicyConfig) -> Self {
        self.o = policy;
        self
    }

    /// Set the opening.
    pub fn with_opening(mut self, opening: OpeningConfig) -> Self {
        self.opening = opening;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a match configuration from TOML.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse match config: {}", e)))
    }

    /// Loads a match configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read match config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(x = ?config.x, o = ?config.o, "Match config loaded");
        Ok(config)
    }
}
