//! Word lists for Wordle
//!
//! Provides embedded word lists compiled into the binary, custom list loading,
//! and [`WordLists`], the word source used to start games.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::game::{Vocabulary, WordSource};
use anyhow::{Context, Result, bail};
use loader::{load_from_file, with_length, words_from_slice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::info;

/// Target words plus the allowed vocabulary for a given word length
///
/// Targets are drawn at random; pass a seed for a reproducible sequence.
#[derive(Debug)]
pub struct WordLists {
    answers: Vec<Word>,
    vocabulary: Vocabulary,
    rng: StdRng,
}

impl WordLists {
    /// Build from explicit lists
    ///
    /// Words of the wrong length are dropped. Every answer is also allowed.
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>, word_length: usize, seed: Option<u64>) -> Self {
        let answers = with_length(answers, word_length);
        let mut vocabulary: Vocabulary = with_length(allowed, word_length).iter().collect();
        for answer in &answers {
            vocabulary.insert(answer);
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            answers,
            vocabulary,
            rng,
        }
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    /// Returns an error if the embedded lists have no words of `word_length` letters.
    pub fn embedded(word_length: usize, seed: Option<u64>) -> Result<Self> {
        let lists = Self::new(
            words_from_slice(ANSWERS),
            words_from_slice(ALLOWED),
            word_length,
            seed,
        );
        if lists.answers.is_empty() {
            bail!("the built-in word lists have no {word_length}-letter words; use --wordlist <file>");
        }
        Ok(lists)
    }

    /// A newline-separated word file used for both targets and guesses
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or has no words of `word_length` letters.
    pub fn from_file(path: impl AsRef<Path>, word_length: usize, seed: Option<u64>) -> Result<Self> {
        let path = path.as_ref();
        let words = load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;

        let lists = Self::new(words.clone(), words, word_length, seed);
        if lists.answers.is_empty() {
            bail!("{} has no {word_length}-letter words", path.display());
        }

        info!(
            path = %path.display(),
            words = lists.answers.len(),
            "loaded custom word list"
        );
        Ok(lists)
    }

    /// Candidate targets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

impl WordSource for WordLists {
    fn next_target(&mut self) -> Option<Word> {
        self.answers.choose(&mut self.rng).cloned()
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
        assert!(ALLOWED_COUNT > ANSWERS_COUNT);
    }

    #[test]
    fn embedded_lists_pick_allowed_targets() {
        let mut lists = WordLists::embedded(5, Some(7)).unwrap();
        assert_eq!(lists.answers().len(), ANSWERS_COUNT);

        for _ in 0..20 {
            let target = lists.next_target().unwrap();
            assert!(lists.vocabulary().contains(target.text()));
        }
    }

    #[test]
    fn embedded_lists_reject_unsupported_length() {
        assert!(WordLists::embedded(7, None).is_err());
    }

    #[test]
    fn seeded_lists_are_reproducible() {
        let mut a = WordLists::embedded(5, Some(42)).unwrap();
        let mut b = WordLists::embedded(5, Some(42)).unwrap();
        for _ in 0..5 {
            assert_eq!(a.next_target(), b.next_target());
        }
    }

    #[test]
    fn new_filters_by_length_and_allows_answers() {
        let answers = loader::parse_words("planet\ncrane");
        let allowed = loader::parse_words("rocket\nslate");
        let mut lists = WordLists::new(answers, allowed, 6, Some(1));

        assert_eq!(lists.answers().len(), 1);
        assert!(lists.vocabulary().contains("planet"));
        assert!(lists.vocabulary().contains("rocket"));
        assert!(!lists.vocabulary().contains("slate"));
        assert_eq!(lists.next_target().unwrap().text(), "planet");
    }

    #[test]
    fn empty_answers_give_no_target() {
        let mut lists = WordLists::new(Vec::new(), Vec::new(), 5, Some(1));
        assert_eq!(lists.next_target(), None);
    }
}
