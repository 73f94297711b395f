//! Errors raised by a game session

use thiserror::Error;

/// Why a session refused to start or refused a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess does not have the configured number of letters.
    #[error("guess must be {expected} letters long, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// The guess is not in the allowed vocabulary.
    #[error("'{0}' is not in the word list")]
    GuessNotAllowed(String),

    /// The session already ended in a win or a loss.
    #[error("the game is already finished")]
    SessionAlreadyFinished,

    /// The target word does not have the configured number of letters.
    #[error("target word must be {expected} letters long, got {actual}")]
    MalformedTarget { expected: usize, actual: usize },

    /// The rules cannot produce a playable game.
    #[error("invalid game configuration: {0}")]
    Configuration(String),
}

impl GameError {
    /// Rejections that leave the session untouched and usable
    ///
    /// Construction errors are never recoverable: no session exists to retry on.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessLength { .. } | Self::GuessNotAllowed(_) | Self::SessionAlreadyFinished
        )
    }
}
