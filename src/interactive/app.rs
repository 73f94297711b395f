//! TUI application state and logic

use crate::config::DisplayConfig;
use crate::core::{LetterStatusMap, ScoredGuess};
use crate::game::{
    GameError, InputSource, Outcome, Presenter, Rules, Statistics, Vocabulary, WordSource,
    run_games,
};
use crate::output::share_grid;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Holds a snapshot of the last board the game asked to draw, plus whatever
/// the player is typing. Nothing here affects the game itself.
pub struct App {
    pub display: DisplayConfig,
    pub rules: Rules,
    pub history: Vec<ScoredGuess>,
    pub letters: LetterStatusMap,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks the game loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep reading keys
    Continue,
    /// Submit the buffered guess
    Submit(String),
    /// Start another game
    NewGame,
    /// Leave the program
    Quit,
}

impl App {
    #[must_use]
    pub fn new(display: DisplayConfig, rules: Rules) -> Self {
        Self {
            display,
            rules,
            history: Vec::new(),
            letters: LetterStatusMap::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. Esc to quit.",
                    rules.word_length, rules.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(rules.max_attempts),
            input_mode: InputMode::Guessing,
            outcome: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 3 messages
        if self.messages.len() > 3 {
            self.messages.remove(0);
        }
    }

    /// Handle a key while the player is typing a guess
    ///
    /// Letters are appended up to the word length, Backspace deletes, and Enter
    /// submits only a full-length word from the vocabulary.
    pub fn handle_guess_key(&mut self, key: KeyEvent, vocabulary: &Vocabulary) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < self.rules.word_length {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyAction::Continue
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.input_buffer.pop();
                KeyAction::Continue
            }
            KeyCode::Enter => {
                if self.input_buffer.len() < self.rules.word_length {
                    self.add_message("Not enough letters", MessageStyle::Error);
                    KeyAction::Continue
                } else if !vocabulary.contains(&self.input_buffer) {
                    let text = format!("{} is not in the word list", self.input_buffer.to_uppercase());
                    self.add_message(&text, MessageStyle::Error);
                    KeyAction::Continue
                } else {
                    KeyAction::Submit(self.input_buffer.clone())
                }
            }
            _ => KeyAction::Continue,
        }
    }

    /// Handle a key on the end-of-game screen
    pub fn handle_game_over_key(&mut self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('n') | KeyCode::Enter => {
                self.start_new_game();
                KeyAction::NewGame
            }
            _ => KeyAction::Continue,
        }
    }

    fn start_new_game(&mut self) {
        self.history.clear();
        self.letters = LetterStatusMap::new();
        self.input_buffer.clear();
        self.messages.clear();
        self.outcome = None;
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn show_board(&mut self, history: &[ScoredGuess], letters: &LetterStatusMap, partial: &str) {
        self.history = history.to_vec();
        self.letters = letters.clone();
        self.input_buffer = partial.chars().take(self.rules.word_length).collect();
    }

    fn show_rejection(&mut self, error: &GameError) {
        let text = match error {
            GameError::GuessNotAllowed(word) => {
                format!("{} is not in the word list", word.to_uppercase())
            }
            other => other.to_string(),
        };
        self.add_message(&text, MessageStyle::Error);
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        self.stats.record(outcome);
        self.input_mode = InputMode::GameOver;

        let style = if outcome.is_win() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&outcome.message(), style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.outcome = Some(outcome.clone());
    }
}

/// The TUI front end: an [`App`] drawn on a terminal
pub struct Tui<B: Backend> {
    pub app: App,
    terminal: Terminal<B>,
}

impl<B: Backend> Tui<B> {
    /// Wrap an already configured terminal
    #[must_use]
    pub fn new(terminal: Terminal<B>, app: App) -> Self {
        Self { app, terminal }
    }

    fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }

    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Next key press, skipping releases and non-key events
fn read_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl<B: Backend> InputSource for Tui<B> {
    fn next_guess(&mut self, partial: &str, vocabulary: &Vocabulary) -> Result<Option<String>> {
        self.app.input_buffer = partial.chars().take(self.app.rules.word_length).collect();
        self.app.input_mode = InputMode::Guessing;

        loop {
            self.draw()?;
            match self.app.handle_guess_key(read_key()?, vocabulary) {
                KeyAction::Submit(guess) => return Ok(Some(guess)),
                KeyAction::Quit => return Ok(None),
                KeyAction::Continue | KeyAction::NewGame => {}
            }
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        loop {
            self.draw()?;
            match self.app.handle_game_over_key(read_key()?) {
                KeyAction::NewGame => return Ok(true),
                KeyAction::Quit => return Ok(false),
                KeyAction::Continue | KeyAction::Submit(_) => {}
            }
        }
    }
}

impl<B: Backend> Presenter for Tui<B> {
    fn render(
        &mut self,
        history: &[ScoredGuess],
        letters: &LetterStatusMap,
        partial: &str,
    ) -> Result<()> {
        self.app.show_board(history, letters, partial);
        self.draw()
    }

    fn reject(&mut self, error: &GameError) -> Result<()> {
        self.app.show_rejection(error);
        self.draw()
    }

    fn finish(&mut self, outcome: &Outcome, _history: &[ScoredGuess]) -> Result<()> {
        self.app.show_outcome(outcome);
        self.draw()
    }
}

/// Run the TUI application
///
/// Plays games until the player quits, then restores the terminal and prints
/// the share grid of the last game and the session statistics.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(words: &mut S, display: DisplayConfig, rules: Rules) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut tui = Tui::new(terminal, App::new(display, rules));

    // Run app
    let res = run_games(words, rules, &mut tui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        tui.terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    tui.terminal.show_cursor()?;

    res?;

    let app = &tui.app;
    if let Some(outcome) = &app.outcome
        && app.display.share_summary
    {
        println!("{}\n", share_grid(&app.display.title, outcome, &app.history, rules));
    }
    crate::output::print_statistics(&app.stats);

    Ok(())
}
