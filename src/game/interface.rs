//! Contracts between a game and the outside world
//!
//! The game itself never touches the terminal or the filesystem. Front ends
//! implement [`InputSource`] and [`Presenter`]; word lists implement [`WordSource`].

use super::{GameError, Outcome, Vocabulary};
use crate::core::{LetterStatusMap, ScoredGuess, Word};
use anyhow::Result;

/// Where guesses come from
pub trait InputSource {
    /// Block until the player submits a candidate guess
    ///
    /// `partial` is the text to start editing from: empty for a fresh attempt,
    /// or the previous candidate after it was rejected. Returns `Ok(None)` if
    /// the player quit.
    ///
    /// # Errors
    /// Returns an error if reading input fails.
    fn next_guess(&mut self, partial: &str, vocabulary: &Vocabulary) -> Result<Option<String>>;

    /// Ask whether to start another game after one has finished
    ///
    /// # Errors
    /// Returns an error if reading input fails.
    fn play_again(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Where the game state is shown
///
/// Presenters only receive data; the game never reads anything back from them.
pub trait Presenter {
    /// Redraw the board
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn render(
        &mut self,
        history: &[ScoredGuess],
        letters: &LetterStatusMap,
        partial: &str,
    ) -> Result<()>;

    /// Tell the player a guess was refused
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn reject(&mut self, error: &GameError) -> Result<()>;

    /// Show the end-of-game message
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn finish(&mut self, outcome: &Outcome, history: &[ScoredGuess]) -> Result<()>;
}

/// Supplies targets and the allowed vocabulary
pub trait WordSource {
    /// Pick the target for the next game, `None` if no target is available
    fn next_target(&mut self) -> Option<Word>;

    /// Every word accepted as a guess
    fn vocabulary(&self) -> &Vocabulary;
}
