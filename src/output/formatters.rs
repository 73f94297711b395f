//! Formatting utilities shared by the console and the TUI

use crate::core::{Classification, ScoredGuess};
use crate::game::{Outcome, Rules};

/// Keyboard layout used for the letter-status hints
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// A letter from a submitted guess
    Scored(char, Classification),
    /// A letter typed into the current attempt
    Typed(char),
    /// Nothing yet
    Empty,
}

impl Tile {
    /// Letter to draw, uppercase, or a space for empty tiles
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Scored(c, _) | Self::Typed(c) => c.to_ascii_uppercase(),
            Self::Empty => ' ',
        }
    }
}

/// Lay out the whole board: past guesses, the current attempt, then empty rows
///
/// Always `rules.max_attempts` rows of `rules.word_length` tiles. The current
/// attempt row only appears while attempts remain.
#[must_use]
pub fn board(history: &[ScoredGuess], partial: &str, rules: Rules) -> Vec<Vec<Tile>> {
    let mut rows: Vec<Vec<Tile>> = history
        .iter()
        .map(|guess| {
            guess
                .iter()
                .map(|(letter, status)| Tile::Scored(char::from(letter), status))
                .collect()
        })
        .collect();

    if rows.len() < rules.max_attempts {
        let mut current: Vec<Tile> = partial
            .chars()
            .take(rules.word_length)
            .map(Tile::Typed)
            .collect();
        current.resize(rules.word_length, Tile::Empty);
        rows.push(current);
    }

    rows.resize(rules.max_attempts.max(rows.len()), vec![Tile::Empty; rules.word_length]);
    rows
}

/// Emoji summary of a finished game, e.g. "Wordle 3/6" followed by one row per guess
#[must_use]
pub fn share_grid(title: &str, outcome: &Outcome, history: &[ScoredGuess], rules: Rules) -> String {
    let score = match outcome {
        Outcome::Won { attempts } => attempts.to_string(),
        Outcome::Lost { .. } => "X".to_string(),
    };

    let mut grid = format!("{title} {score}/{}\n", rules.max_attempts);
    for guess in history {
        grid.push('\n');
        grid.push_str(&guess.to_emoji());
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
