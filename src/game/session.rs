//! A single game: one target, a fixed attempt budget, and the guesses made so far

use super::{GameError, Vocabulary};
use crate::core::{LetterStatusMap, ScoredGuess, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Board dimensions for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Number of guesses before the game is lost
    pub max_attempts: usize,
    /// Number of letters in the target and every guess
    pub word_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            word_length: 5,
        }
    }
}

impl Rules {
    /// Check that the rules describe a playable game
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if either dimension is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_attempts == 0 {
            return Err(GameError::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.word_length == 0 {
            return Err(GameError::Configuration(
                "word_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost { target: Word },
}

impl Outcome {
    /// Message shown when the game ends
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Won { attempts } => format!("{}!", win_message(*attempts)),
            Self::Lost { target } => format!("You lost! The word was '{target}'."),
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Praise for a win, keyed by the number of attempts used
#[must_use]
pub const fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "Genius",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        6 => "Phew",
        _ => "Solved",
    }
}

/// State machine for one game
///
/// The target and rules never change. History only grows, one entry per
/// accepted guess, and stops growing once the game is won or lost.
#[derive(Debug)]
pub struct GameSession<'a> {
    target: Word,
    vocabulary: &'a Vocabulary,
    rules: Rules,
    history: Vec<ScoredGuess>,
    letters: LetterStatusMap,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a new game
    ///
    /// # Errors
    /// - `GameError::Configuration` if the rules have a zero dimension
    /// - `GameError::MalformedTarget` if the target length differs from `rules.word_length`
    pub fn new(target: Word, vocabulary: &'a Vocabulary, rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;

        if target.len() != rules.word_length {
            return Err(GameError::MalformedTarget {
                expected: rules.word_length,
                actual: target.len(),
            });
        }

        Ok(Self {
            target,
            vocabulary,
            rules,
            history: Vec::with_capacity(rules.max_attempts),
            letters: LetterStatusMap::new(),
            state: GameState::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// The candidate is trimmed and compared case-insensitively. On success the
    /// scored guess is appended to the history and returned.
    ///
    /// # Errors
    /// - `GameError::SessionAlreadyFinished` if the game was already won or lost
    /// - `GameError::InvalidGuessLength` if the candidate has the wrong number of letters
    /// - `GameError::GuessNotAllowed` if the candidate is not in the vocabulary
    ///
    /// A rejected guess leaves the session unchanged.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<&ScoredGuess, GameError> {
        if self.is_finished() {
            return Err(GameError::SessionAlreadyFinished);
        }

        let candidate = candidate.trim().to_lowercase();
        let length = candidate.chars().count();
        if length != self.rules.word_length {
            return Err(GameError::InvalidGuessLength {
                expected: self.rules.word_length,
                actual: length,
            });
        }

        if !self.vocabulary.contains(&candidate) {
            return Err(GameError::GuessNotAllowed(candidate));
        }

        let word = Word::new(candidate.as_str()).map_err(|_| GameError::GuessNotAllowed(candidate))?;
        let scored = ScoredGuess::new(word, &self.target);
        self.letters.update(&scored);

        self.state = if scored.is_solved() {
            GameState::Won
        } else if self.history.len() + 1 == self.rules.max_attempts {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        debug!(
            attempt = self.history.len() + 1,
            guess = %scored,
            state = ?self.state,
            "guess scored"
        );

        self.history.push(scored);
        Ok(&self.history[self.history.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// Best-known status of every guessed letter
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterStatusMap {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.rules.max_attempts - self.history.len()
    }

    /// The result of the game, `None` while it is still in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Won => Some(Outcome::Won {
                attempts: self.history.len(),
            }),
            GameState::Lost => Some(Outcome::Lost {
                target: self.target.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words([
            "crane", "slate", "irate", "tares", "bliss", "flute", "light", "spoon",
        ])
    }

    fn session(vocab: &Vocabulary) -> GameSession<'_> {
        GameSession::new(Word::new("slate").unwrap(), vocab, Rules::default()).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let vocab = vocabulary();
        let game = session(&vocab);

        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.history().is_empty());
        assert!(game.letters().is_empty());
        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn new_rejects_bad_configuration() {
        let vocab = vocabulary();
        let target = Word::new("slate").unwrap();

        let zero_attempts = Rules {
            max_attempts: 0,
            word_length: 5,
        };
        assert!(matches!(
            GameSession::new(target.clone(), &vocab, zero_attempts),
            Err(GameError::Configuration(_))
        ));

        let zero_length = Rules {
            max_attempts: 6,
            word_length: 0,
        };
        assert!(matches!(
            GameSession::new(target, &vocab, zero_length),
            Err(GameError::Configuration(_))
        ));
    }

    #[test]
    fn new_rejects_malformed_target() {
        let vocab = vocabulary();
        let result = GameSession::new(Word::new("slates").unwrap(), &vocab, Rules::default());
        assert!(matches!(
            result,
            Err(GameError::MalformedTarget {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn guess_is_scored_and_recorded() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        let scored = game.submit_guess("crane").unwrap();
        assert_eq!(
            scored.classifications(),
            &[
                Classification::Absent,
                Classification::Absent,
                Classification::Correct,
                Classification::Absent,
                Classification::Correct
            ]
        );

        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.letters().get(b'a'), Some(Classification::Correct));
        assert_eq!(game.letters().get(b'c'), Some(Classification::Absent));
    }

    #[test]
    fn guess_is_case_insensitive_and_trimmed() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        assert!(game.submit_guess("  CRANE \n").is_ok());
        assert_eq!(game.history()[0].word().text(), "crane");
    }

    #[test]
    fn wrong_length_is_rejected_without_change() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        assert_eq!(
            game.submit_guess("cranes").unwrap_err(),
            GameError::InvalidGuessLength {
                expected: 5,
                actual: 6
            }
        );
        assert_eq!(
            game.submit_guess("").unwrap_err(),
            GameError::InvalidGuessLength {
                expected: 5,
                actual: 0
            }
        );
        assert!(game.history().is_empty());
        assert!(game.letters().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_change() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        assert_eq!(
            game.submit_guess("zzzzz").unwrap_err(),
            GameError::GuessNotAllowed("zzzzz".to_string())
        );
        assert!(game.history().is_empty());
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn matching_guess_wins() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        game.submit_guess("crane").unwrap();
        game.submit_guess("irate").unwrap();
        let last = game.submit_guess("slate").unwrap();
        assert!(last.is_solved());

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome(), Some(Outcome::Won { attempts: 3 }));
        assert_eq!(game.outcome().unwrap().message(), "Impressive!");
    }

    #[test]
    fn budget_exhausted_loses() {
        let vocab = vocabulary();
        let mut game = session(&vocab);

        for guess in ["crane", "irate", "tares", "bliss", "flute"] {
            game.submit_guess(guess).unwrap();
            assert_eq!(game.state(), GameState::InProgress);
        }
        game.submit_guess("light").unwrap();

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(
            game.outcome().unwrap().message(),
            "You lost! The word was 'slate'."
        );
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let vocab = vocabulary();
        let rules = Rules {
            max_attempts: 2,
            word_length: 5,
        };
        let mut game = GameSession::new(Word::new("slate").unwrap(), &vocab, rules).unwrap();

        game.submit_guess("crane").unwrap();
        game.submit_guess("slate").unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Won { attempts: 2 }));
    }

    #[test]
    fn finished_session_rejects_further_guesses() {
        let vocab = vocabulary();
        let mut game = session(&vocab);
        game.submit_guess("slate").unwrap();

        let letters_before = game.letters().clone();
        assert_eq!(
            game.submit_guess("crane").unwrap_err(),
            GameError::SessionAlreadyFinished
        );
        // Even an invalid guess reports the finished state first
        assert_eq!(
            game.submit_guess("x").unwrap_err(),
            GameError::SessionAlreadyFinished
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.letters(), &letters_before);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn lost_session_rejects_further_guesses() {
        let vocab = vocabulary();
        let rules = Rules {
            max_attempts: 1,
            word_length: 5,
        };
        let mut game = GameSession::new(Word::new("slate").unwrap(), &vocab, rules).unwrap();

        game.submit_guess("crane").unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(
            game.submit_guess("slate").unwrap_err(),
            GameError::SessionAlreadyFinished
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn win_messages() {
        let expected = ["Genius", "Magnificent", "Impressive", "Splendid", "Great", "Phew"];
        for (i, message) in expected.iter().enumerate() {
            assert_eq!(win_message(i + 1), *message);
        }
        assert_eq!(win_message(0), "Solved");
        assert_eq!(win_message(7), "Solved");
    }
}
