//! Guess scoring and per-position feedback
//!
//! Each position of a guess is classified against the target:
//! - `Absent`: the letter is not in the target (or every occurrence is already used)
//! - `Present`: the letter is in the target at another, unused position
//! - `Correct`: the letter is at the same position in the target
//!
//! Duplicate letters follow the usual Wordle rules: exact matches claim their
//! target letters first, then the remaining guess letters claim whatever is left
//! from left to right.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered from least to most informative, so `max` picks the better of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Single-letter code: `G` (green), `Y` (yellow), `-` (gray)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Classify every position of `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume those target positions
/// 2. Second pass: for every other position, consume the leftmost unused target
///    position holding the same letter (`Present`), or mark it `Absent`
///
/// # Panics
/// Panics if the words have different lengths. Callers validate lengths before
/// scoring, so a mismatch is a bug rather than a game rule violation.
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification::*, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
///
/// assert_eq!(
///     score(&guess, &target),
///     vec![Absent, Absent, Correct, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Vec<Classification> {
    assert_eq!(
        guess.len(),
        target.len(),
        "cannot score '{guess}' against '{target}': lengths differ"
    );

    let guess = guess.letters();
    let target = target.letters();
    let mut result = vec![Classification::Absent; guess.len()];
    let mut consumed = vec![false; target.len()];

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = Classification::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: misplaced letters from the unused target positions
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == Classification::Correct {
            continue;
        }

        let available = target
            .iter()
            .zip(&consumed)
            .position(|(&t, &used)| t == g && !used);

        if let Some(j) = available {
            result[i] = Classification::Present;
            consumed[j] = true;
        }
    }

    result
}

/// A guess together with its feedback
///
/// Built once by scoring and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: Word,
    classifications: Vec<Classification>,
}

impl ScoredGuess {
    /// Score `guess` against `target`
    ///
    /// # Panics
    /// Panics if the words have different lengths (see [`score`]).
    #[must_use]
    pub fn new(guess: Word, target: &Word) -> Self {
        let classifications = score(&guess, target);
        Self {
            word: guess,
            classifications,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-position classifications, same length as the word
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    /// Iterate over (letter, classification) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Classification)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.classifications.iter().copied())
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.classifications
            .iter()
            .all(|&c| c == Classification::Correct)
    }

    /// Convert the feedback to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classifications.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.classifications.iter().map(|c| c.code()).collect();
        write!(f, "{} {codes}", self.word)
    }
}
