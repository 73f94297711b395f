//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word and press Enter.

use crate::config::DisplayConfig;
use crate::core::{LetterStatusMap, ScoredGuess};
use crate::game::{
    GameError, InputSource, Outcome, Presenter, Rules, Statistics, Vocabulary, WordSource,
    run_games,
};
use crate::output::{board, keyboard_lines, print_statistics, row_string, share_grid};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Console front end over any line reader and writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    display: DisplayConfig,
    rules: Rules,
    stats: Statistics,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout
    #[must_use]
    pub fn stdio(display: DisplayConfig, rules: Rules) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), display, rules)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W, display: DisplayConfig, rules: Rules) -> Self {
        Self {
            reader,
            writer,
            display,
            rules,
            stats: Statistics::new(rules.max_attempts),
        }
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Read one trimmed line, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("failed to read from stdin")?;

        if read == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> InputSource for Console<R, W> {
    fn next_guess(&mut self, _partial: &str, _vocabulary: &Vocabulary) -> Result<Option<String>> {
        let prompt = format!("Guess ({} letters, 'quit' to exit)", self.rules.word_length);
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        let answer = self.read_line("Play again? (yes/no)")?;
        Ok(matches!(
            answer.as_deref().map(str::to_lowercase).as_deref(),
            Some("yes" | "y")
        ))
    }
}

impl<R: BufRead, W: Write> Presenter for Console<R, W> {
    fn render(
        &mut self,
        history: &[ScoredGuess],
        letters: &LetterStatusMap,
        partial: &str,
    ) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "  {}", self.display.heading().bright_green().bold())?;
        writeln!(self.writer)?;

        for row in board(history, partial, self.rules) {
            writeln!(self.writer, "  {}", row_string(&row))?;
        }

        if self.display.show_keyboard {
            writeln!(self.writer)?;
            for line in keyboard_lines(letters) {
                writeln!(self.writer, "  {line}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn reject(&mut self, error: &GameError) -> Result<()> {
        let message = match error {
            GameError::GuessNotAllowed(word) => {
                format!("Not in word list: {}", word.to_uppercase())
            }
            GameError::InvalidGuessLength { expected, .. } => {
                format!("Guesses must be {expected} letters")
            }
            other => other.to_string(),
        };
        writeln!(self.writer, "❌ {}", message.red())?;
        Ok(())
    }

    fn finish(&mut self, outcome: &Outcome, history: &[ScoredGuess]) -> Result<()> {
        self.stats.record(outcome);

        let message = outcome.message();
        if outcome.is_win() {
            writeln!(self.writer, "  🎉 {}", message.green().bold())?;
        } else {
            writeln!(self.writer, "  {}", message.red().bold())?;
        }

        if self.display.share_summary {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                share_grid(&self.display.title, outcome, history, self.rules)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Run the simple interactive CLI mode
///
/// Plays games until the player quits or declines another round.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output,
/// or if a session cannot be started with the given rules.
pub fn run_simple<S: WordSource>(
    words: &mut S,
    display: DisplayConfig,
    rules: Rules,
) -> Result<()> {
    let mut console = Console::stdio(display, rules);
    run_games(words, rules, &mut console)?;
    print_statistics(console.statistics());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WordLists, loader::parse_words};

    fn words() -> WordLists {
        WordLists::new(
            parse_words("slate"),
            parse_words("crane\nirate"),
            5,
            Some(3),
        )
    }

    fn make_console(input: &str) -> Console<&[u8], Vec<u8>> {
        colored::control::set_override(false);
        Console::new(
            input.as_bytes(),
            Vec::new(),
            DisplayConfig::default(),
            Rules::default(),
        )
    }

    #[test]
    fn plays_a_winning_game() {
        let mut words = words();
        let mut console = make_console("crane\nslate\nno\n");

        run_games(&mut words, Rules::default(), &mut console).unwrap();

        let output = String::from_utf8(console.writer.clone()).unwrap();
        assert!(output.contains("Magnificent!"));
        assert!(output.contains("Wordle 2/6"));
        assert_eq!(console.statistics().games_won, 1);
    }

    #[test]
    fn reports_rejected_guesses() {
        let mut words = words();
        let mut console = make_console("zzzzz\ncran\nslate\nno\n");

        run_games(&mut words, Rules::default(), &mut console).unwrap();

        let output = String::from_utf8(console.writer.clone()).unwrap();
        assert!(output.contains("Not in word list: ZZZZZ"));
        assert!(output.contains("Guesses must be 5 letters"));
        assert!(output.contains("Genius!"));
    }

    #[test]
    fn plays_again_until_declined() {
        let mut words = words();
        let mut console = make_console("slate\nyes\nslate\nn\n");

        run_games(&mut words, Rules::default(), &mut console).unwrap();
        assert_eq!(console.statistics().total_games, 2);
        assert_eq!(console.statistics().max_streak, 2);
    }

    #[test]
    fn losing_reveals_target() {
        let mut words = words();
        let rules = Rules {
            max_attempts: 1,
            word_length: 5,
        };
        colored::control::set_override(false);
        let mut console = Console::new(
            "irate\n".as_bytes(),
            Vec::new(),
            DisplayConfig::default(),
            rules,
        );

        run_games(&mut words, rules, &mut console).unwrap();

        let output = String::from_utf8(console.writer.clone()).unwrap();
        assert!(output.contains("You lost! The word was 'slate'."));
        assert_eq!(console.statistics().games_won, 0);
    }

    #[test]
    fn quit_and_end_of_input_stop_the_game() {
        let mut words = words();
        let mut console = make_console("quit\n");
        run_games(&mut words, Rules::default(), &mut console).unwrap();
        assert_eq!(console.statistics().total_games, 0);

        let mut console = make_console("crane\n");
        run_games(&mut words, Rules::default(), &mut console).unwrap();
        assert_eq!(console.statistics().total_games, 0);
    }
}
