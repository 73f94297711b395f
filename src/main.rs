//! Wordle - CLI
//!
//! Terminal Wordle with a TUI and a plain console mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_words},
    config::Config,
    interactive::run_tui,
    output::print_scored_guess,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries, in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, built-in lists) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Path to a TOML config file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Number of guesses allowed (overrides the config file)
    #[arg(long, global = true)]
    attempts: Option<usize>,

    /// Word length (overrides the config file)
    #[arg(long, global = true)]
    length: Option<usize>,

    /// Seed for target selection, for a repeatable sequence of games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Send tracing output to `path`
///
/// Nothing is logged without a file, since the TUI owns the terminal.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed; keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Load word lists based on the -w flag
///
/// - "all": the built-in answer and allowed lists
/// - "<path>": a custom file, used for both targets and guesses
fn load_wordlists(wordlist_mode: &str, word_length: usize, seed: Option<u64>) -> Result<WordLists> {
    match wordlist_mode {
        "all" => WordLists::embedded(word_length, seed),
        path => WordLists::from_file(path, word_length, seed),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    if let Some(Commands::Score { guess, target }) = &cli.command {
        let scored = score_words(guess, target)?;
        print_scored_guess(&scored);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.attempts, cli.length);
    config.rules.validate()?;
    info!(?config, "configuration loaded");

    let mut words = load_wordlists(&cli.wordlist, config.rules.word_length, cli.seed)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(&mut words, config.display, config.rules),
        Commands::Simple => run_simple(&mut words, config.display, config.rules),
        Commands::Score { .. } => Ok(()),
    }
}
