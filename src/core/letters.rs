//! Best-known status of every guessed letter
//!
//! Drives the keyboard hints: once a letter is known to be `Correct` it stays
//! green, even if a later guess uses it in the wrong place.

use super::{Classification, ScoredGuess};
use rustc_hash::FxHashMap;

/// Mapping from letter to the best classification seen so far
///
/// Entries are only ever upgraded (`Absent < Present < Correct`) and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    statuses: FxHashMap<u8, Classification>,
}

impl LetterStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every letter of a scored guess into the map
    pub fn update(&mut self, guess: &ScoredGuess) {
        for (letter, classification) in guess.iter() {
            self.merge(letter, classification);
        }
    }

    /// Record `classification` for `letter`, keeping the better of old and new
    ///
    /// Letters are stored lowercase. Returns the status now stored.
    pub fn merge(&mut self, letter: u8, classification: Classification) -> Classification {
        let entry = self
            .statuses
            .entry(letter.to_ascii_lowercase())
            .or_insert(classification);
        *entry = (*entry).max(classification);
        *entry
    }

    /// Best-known status of a letter, `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        self.statuses.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Iterate over all known letters (no particular order)
    pub fn iter(&self) -> impl Iterator<Item = (u8, Classification)> + '_ {
        self.statuses.iter().map(|(&letter, &status)| (letter, status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
