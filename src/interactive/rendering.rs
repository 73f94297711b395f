//! TUI rendering with ratatui
//!
//! Board grid, keyboard hints, messages and a status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Classification;
use crate::output::{KEYBOARD_ROWS, Tile, board};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

fn status_style(status: Option<Classification>) -> Style {
    match status {
        Some(Classification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Scored(_, status) => status_style(Some(status)),
        Tile::Typed(_) => Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        Tile::Empty => Style::default().bg(Color::Black),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    // Each board row is followed by a spacer line, plus the border
    let board_height = (app.rules.max_attempts * 2 + 1) as u16;
    let keyboard_height = if app.display.show_keyboard { 7 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(board_height),    // Board
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Min(5),                  // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    if app.display.show_keyboard {
        render_keyboard(f, app, chunks[2]);
    }
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.display.heading().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for row in board(&app.history, &app.input_buffer, app.rules) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(Span::styled(format!(" {} ", tile.label()), tile_style(tile)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .bytes()
            .flat_map(|letter| {
                let label = format!(" {} ", char::from(letter.to_ascii_uppercase()));
                [
                    Span::styled(label, status_style(app.letters.get(letter))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let title = match app.input_mode {
        InputMode::Guessing => " Messages ",
        InputMode::GameOver => " Game Over | 'n' new game, 'q' quit ",
    };

    let messages_list =
        List::new(messages).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt {}/{}",
        (app.history.len() + 1).min(app.rules.max_attempts),
        app.rules.max_attempts
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::core::{LetterStatusMap, ScoredGuess, Word};
    use crate::game::{Outcome, Presenter, Rules};
    use crate::interactive::Tui;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(tui: &Tui<TestBackend>) -> String {
        let buffer = tui.terminal().backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn tui() -> Tui<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        Tui::new(terminal, App::new(DisplayConfig::default(), Rules::default()))
    }

    #[test]
    fn draws_heading_board_and_keyboard() {
        let mut tui = tui();
        let target = Word::new("slate").unwrap();
        let history = vec![ScoredGuess::new(Word::new("crane").unwrap(), &target)];
        let mut letters = LetterStatusMap::new();
        letters.update(&history[0]);

        tui.render(&history, &letters, "sl").unwrap();
        let text = screen_text(&tui);

        assert!(text.contains("WORDLE"));
        assert!(text.contains(" C   R   A   N   E "));
        assert!(text.contains(" S   L "));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Attempt 2/6"));
    }

    #[test]
    fn draws_outcome_message() {
        let mut tui = tui();
        let target = Word::new("slate").unwrap();
        let history = vec![ScoredGuess::new(target.clone(), &target)];
        let mut letters = LetterStatusMap::new();
        letters.update(&history[0]);

        tui.render(&history, &letters, "").unwrap();
        tui.finish(&Outcome::Won { attempts: 1 }, &history).unwrap();
        let text = screen_text(&tui);

        assert!(text.contains("Genius!"));
        assert!(text.contains("Game Over"));
        assert!(text.contains("Games: 1 | Win Rate: 100%"));
    }

    #[test]
    fn keyboard_can_be_hidden() {
        let display = DisplayConfig {
            show_keyboard: false,
            ..DisplayConfig::default()
        };
        let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut tui = Tui::new(terminal, App::new(display, Rules::default()));

        tui.render(&[], &LetterStatusMap::new(), "").unwrap();
        assert!(!screen_text(&tui).contains("Keyboard"));
    }
}
