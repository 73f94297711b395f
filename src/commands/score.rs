//! Score a guess against a target without playing a game

use crate::core::{ScoredGuess, Word};
use anyhow::{Context, Result, ensure};

/// Score `guess` against `target`, checking both words first
///
/// # Errors
///
/// Returns an error if either word is not purely alphabetic or if their
/// lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoredGuess> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;

    ensure!(
        guess.len() == target.len(),
        "guess has {} letters but target has {}",
        guess.len(),
        target.len()
    );

    Ok(ScoredGuess::new(guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_words() {
        let scored = score_words("ROBOT", "floor").unwrap();
        assert_eq!(scored.to_emoji(), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = score_words("crane", "planet").unwrap_err();
        assert_eq!(err.to_string(), "guess has 5 letters but target has 6");
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(score_words("cr4ne", "slate").is_err());
        assert!(score_words("crane", "").is_err());
    }
}
