//! Colored console rendering of boards, keyboards and statistics

use super::formatters::{KEYBOARD_ROWS, Tile, create_progress_bar};
use crate::core::{Classification, LetterStatusMap, ScoredGuess};
use crate::game::Statistics;
use colored::{ColoredString, Colorize};

fn colorize(label: &str, status: Option<Classification>) -> ColoredString {
    match status {
        Some(Classification::Correct) => label.black().on_green().bold(),
        Some(Classification::Present) => label.black().on_yellow().bold(),
        Some(Classification::Absent) => label.white().on_bright_black(),
        None => label.white().on_black(),
    }
}

/// A single board tile like " A " with its feedback color
#[must_use]
pub fn tile_string(tile: Tile) -> ColoredString {
    let label = format!(" {} ", tile.label());
    match tile {
        Tile::Scored(_, status) => colorize(&label, Some(status)),
        Tile::Typed(_) => label.bright_white().on_black().bold(),
        Tile::Empty => label.on_black(),
    }
}

/// One board row, tiles separated by a space
#[must_use]
pub fn row_string(row: &[Tile]) -> String {
    row.iter()
        .map(|&tile| tile_string(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard, one line per row, each key colored by its best-known status
#[must_use]
pub fn keyboard_lines(letters: &LetterStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let keys = row
                .bytes()
                .map(|letter| {
                    let label = format!(" {} ", char::from(letter.to_ascii_uppercase()));
                    colorize(&label, letters.get(letter)).to_string()
                })
                .collect::<Vec<_>>()
                .join("");
            format!("{}{keys}", " ".repeat(index * 2))
        })
        .collect()
}

/// Print a scored guess on one line, e.g. for the `score` command
pub fn print_scored_guess(guess: &ScoredGuess) {
    let row: Vec<Tile> = guess
        .iter()
        .map(|(letter, status)| Tile::Scored(char::from(letter), status))
        .collect();
    println!("{}  {}", row_string(&row), guess.to_emoji());
}

/// Print the statistics collected so far
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return;
    }

    println!("\n   {}", "Guess distribution:".bright_cyan());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
