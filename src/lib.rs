//! Wordle
//!
//! A terminal word-guessing game: find the hidden word in a limited number of
//! tries, with each guess scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Classification, Word, score};
//!
//! let guess = Word::new("robot").unwrap();
//! let target = Word::new("floor").unwrap();
//!
//! let result = score(&guess, &target);
//! assert_eq!(result[3], Classification::Correct);
//! assert_eq!(result[2], Classification::Absent);
//! ```

// Core domain types
pub mod core;

// Sessions, rules and the game loop
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
