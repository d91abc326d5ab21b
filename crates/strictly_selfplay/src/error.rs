//! Errors raised while running a self-play match.

use strictly_minimax::{ConfigError, EngineError};

/// Error that can stop a match.
#[derive(Debug, Clone, derive_more::Display)]
pub enum MatchError {
    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// The engine or the board rejected a move.
    #[display("Engine error: {}", _0)]
    Engine(EngineError),

    /// The match configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::GameOver => None,
            MatchError::Engine(e) => Some(e),
            MatchError::Config(e) => Some(e),
        }
    }
}

impl From<EngineError> for MatchError {
    fn from(e: EngineError) -> Self {
        MatchError::Engine(e)
    }
}

impl From<ConfigError> for MatchError {
    fn from(e: ConfigError) -> Self {
        MatchError::Config(e)
    }
}
