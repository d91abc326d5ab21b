//! Move policy configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How to pick one move when the search reports several equally good ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lowest-index optimal move.
    #[default]
    #[display("first_move")]
    FirstMove,
    /// Uniformly random optimal move, drawn from the injected choice source.
    #[display("uniform_random")]
    UniformRandom,
}

/// Which tactical shortcuts run before the search, and how ties are broken.
///
/// Shortcuts are tried in fixed priority: immediate win, forced block, fork.
/// The default is a plain search with first-move tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Take a square that completes a line.
    pub use_immediate_win: bool,
    /// Take the square the opponent needs to complete a line.
    pub use_forced_block: bool,
    /// Take the first square that leaves two live lines.
    pub use_fork: bool,
    /// Tie-break applied to the search result.
    pub tie_break: TieBreak,
}

impl PolicyConfig {
    /// Exhaustive search only, first optimal move.
    pub fn search_only() -> Self {
        Self::default()
    }

    /// Every shortcut enabled, first optimal move.
    pub fn all_heuristics() -> Self {
        Self {
            use_immediate_win: true,
            use_forced_block: true,
            use_fork: true,
            tie_break: TieBreak::FirstMove,
        }
    }

    /// Set the immediate-win shortcut.
    pub fn with_immediate_win(mut self, enabled: bool) -> Self {
        self.use_immediate_win = enabled;
        self
    }

    /// Set the forced-block shortcut.
    pub fn with_forced_block(mut self, enabled: bool) -> Self {
        self.use_forced_block = enabled;
        self
    }

    /// Set the fork shortcut.
    pub fn with_fork(mut self, enabled: bool) -> Self {
        self.use_fork = enabled;
        self
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// True if any shortcut runs before the search.
    pub fn uses_heuristics(&self) -> bool {
        self.use_immediate_win || self.use_forced_block || self.use_fork
    }

    /// Parses a policy from TOML. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse policy: {}", e)))
    }

    /// Loads a policy from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading policy from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read policy file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Policy loaded");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_plain_search() {
        let config = PolicyConfig::default();
        assert_eq!(config, PolicyConfig::search_only());
        assert!(!config.uses_heuristics());
        assert_eq!(config.tie_break, TieBreak::FirstMove);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PolicyConfig::default()
            .with_immediate_win(true)
            .with_fork(true)
            .with_tie_break(TieBreak::UniformRandom);

        assert!(config.use_immediate_win);
        assert!(!config.use_forced_block);
        assert!(config.use_fork);
        assert_eq!(config.tie_break, TieBreak::UniformRandom);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PolicyConfig::from_toml_str(
            r#"
            use_forced_block = true
            tie_break = "uniform_random"
            "#,
        )
        .unwrap();

        assert!(!config.use_immediate_win);
        assert!(config.use_forced_block);
        assert!(!config.use_fork);
        assert_eq!(config.tie_break, TieBreak::UniformRandom);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = PolicyConfig::from_toml_str("tie_break = \"coin_flip\"").unwrap_err();
        assert!(err.message.contains("Failed to parse policy"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "use_immediate_win = true\nuse_forced_block = true\nuse_fork = true"
        )
        .unwrap();

        let config = PolicyConfig::from_file(file.path()).unwrap();
        assert_eq!(config, PolicyConfig::all_heuristics());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PolicyConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read policy file"));
    }

    #[test]
    fn test_serialization() {
        let config = PolicyConfig::all_heuristics().with_tie_break(TieBreak::UniformRandom);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"uniform_random\""));
        let back: PolicyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
