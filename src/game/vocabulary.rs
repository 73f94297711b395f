//! The set of words accepted as guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Allowed guesses, stored lowercase
///
/// Always a superset of the words that can be picked as targets.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: FxHashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from any list of strings
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Add a word, returns false if it was already present
    pub fn insert(&mut self, word: &Word) -> bool {
        self.words.insert(word.text().to_string())
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        if candidate.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&candidate.to_ascii_lowercase())
        } else {
            self.words.contains(candidate)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a Word> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = &'a Word>>(iter: T) -> Self {
        Self::from_words(iter.into_iter().map(Word::text))
    }
}
