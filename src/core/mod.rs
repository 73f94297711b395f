//! Core domain types for Wordle
//!
//! Words, guess scoring and letter-status aggregation. Everything here is pure:
//! no I/O, no randomness, no global state.

mod feedback;
mod letters;
mod word;

pub use feedback::{Classification, ScoredGuess, score};
pub use letters::LetterStatusMap;
pub use word::{Word, WordError};
