//! The read, score and render loop for one game

use super::{GameSession, InputSource, Outcome, Presenter, Rules, WordSource};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Play a session to completion against a front end
///
/// Returns the outcome, or `None` if the player quit before the game ended.
/// Rejected guesses are reported to the presenter and handed back to the input
/// source as the starting point for the next attempt.
///
/// # Errors
/// Returns an error if the front end fails to read or draw, or if the session
/// reports an error that is not a rejected guess.
pub fn play<F>(session: &mut GameSession<'_>, frontend: &mut F) -> Result<Option<Outcome>>
where
    F: InputSource + Presenter + ?Sized,
{
    info!(
        word_length = session.rules().word_length,
        max_attempts = session.rules().max_attempts,
        "game started"
    );

    let mut partial = String::new();

    loop {
        if let Some(outcome) = session.outcome() {
            frontend.render(session.history(), session.letters(), "")?;
            frontend.finish(&outcome, session.history())?;
            info!(attempts = session.attempts_used(), won = outcome.is_win(), "game finished");
            return Ok(Some(outcome));
        }

        frontend.render(session.history(), session.letters(), &partial)?;

        let Some(candidate) = frontend.next_guess(&partial, session.vocabulary())? else {
            info!(attempts = session.attempts_used(), "player quit");
            return Ok(None);
        };

        match session.submit_guess(&candidate) {
            Ok(_) => partial.clear(),
            Err(error) if error.is_recoverable() => {
                debug!(%candidate, %error, "guess rejected");
                frontend.reject(&error)?;
                partial = candidate;
            }
            Err(error) => return Err(error.into()),
        }
    }
}

/// Play games on any front end until it stops asking for more
///
/// # Errors
///
/// Returns an error if no target is available, a session cannot be started,
/// or the front end fails.
pub fn run_games<S, F>(words: &mut S, rules: Rules, frontend: &mut F) -> Result<()>
where
    S: WordSource,
    F: InputSource + Presenter,
{
    loop {
        let target = words.next_target().context("no target words available")?;
        let mut session = GameSession::new(target, words.vocabulary(), rules)?;

        if play(&mut session, frontend)?.is_none() || !frontend.play_again()? {
            return Ok(());
        }
    }
}
