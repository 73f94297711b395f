//! Configuration file support
//!
//! An optional TOML file sets the board size and cosmetic options. Every field
//! has a default, so a partial file (or no file) is fine:
//!
//! ```toml
//! [rules]
//! max_attempts = 6
//! word_length = 5
//!
//! [display]
//! title = "Wordle"
//! show_keyboard = true
//! share_summary = true
//! ```
//!
//! Command-line flags override values from the file.

use crate::game::Rules;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: Rules,
    pub display: DisplayConfig,
}

/// Cosmetic settings, only read by presenters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name shown in the heading and the share summary
    pub title: String,
    /// Draw the letter-status keyboard under the board
    pub show_keyboard: bool,
    /// Print the emoji grid after a game
    pub share_summary: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Wordle".to_string(),
            show_keyboard: true,
            share_summary: true,
        }
    }
}

impl DisplayConfig {
    /// Title with the crate version, e.g. "Wordle 1.0.0"
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} {}", self.title, env!("CARGO_PKG_VERSION"))
    }
}

impl Config {
    /// Load configuration from a file, or use the defaults when `path` is `None`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, max_attempts: Option<usize>, word_length: Option<usize>) -> Self {
        if let Some(max_attempts) = max_attempts {
            self.rules.max_attempts = max_attempts;
        }
        if let Some(word_length) = word_length {
            self.rules.word_length = word_length;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.rules.max_attempts, 6);
        assert_eq!(config.rules.word_length, 5);
        assert_eq!(config.display.title, "Wordle");
        assert!(config.display.show_keyboard);
        assert_eq!(Config::load(None).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[rules]\nmax_attempts = 8\n").unwrap();
        assert_eq!(config.rules.max_attempts, 8);
        assert_eq!(config.rules.word_length, 5);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn display_section() {
        let config =
            Config::from_toml("[display]\ntitle = \"Lingo\"\nshow_keyboard = false\n").unwrap();
        assert_eq!(config.display.title, "Lingo");
        assert!(!config.display.show_keyboard);
        assert!(config.display.heading().starts_with("Lingo "));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[rules\nmax_attempts = ").is_err());
        assert!(Config::from_toml("[rules]\nmax_attempts = \"six\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load(Some(Path::new("no/such/config.toml"))).is_err());
    }

    #[test]
    fn overrides_win() {
        let config = Config::default().with_overrides(Some(4), None);
        assert_eq!(config.rules.max_attempts, 4);
        assert_eq!(config.rules.word_length, 5);
    }
}
