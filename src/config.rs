//! Game configuration
//!
//! Limits shared by every round of a simulation.

use thiserror::Error;

/// Per-game limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before a round is lost (default: 8)
    pub max_attempts: usize,

    /// Longest word accepted from a word list (default: 24)
    pub max_word_length: usize,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum word length must be at least 1")]
    ZeroWordLength,
}

impl GameConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 8;
    pub const DEFAULT_MAX_WORD_LENGTH: usize = 24;

    #[must_use]
    pub const fn new(max_attempts: usize, max_word_length: usize) -> Self {
        Self {
            max_attempts,
            max_word_length,
        }
    }

    /// Check the configuration before starting a game
    ///
    /// A zero attempt budget is allowed: such rounds end before the first guess.
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroWordLength` if `max_word_length` is 0.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_MAX_WORD_LENGTH)
    }
}
