//! TUI rendering with ratatui
//!
//! Layout for the two-player word search interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_turn;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid and history
            Constraint::Percentage(40), // Scores, words, messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WHERE'S THAT WORD?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let grid_height = app.game.grid().row_count() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(grid_height), Constraint::Min(3)])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.game.grid();
    let label = Style::default().fg(Color::DarkGray);

    let mut header = String::from("   ");
    for col in 0..grid.col_count() {
        header.push_str(&format!("{col:<3}"));
    }
    let mut lines = vec![Line::from(Span::styled(header, label))];

    for (row_number, row) in grid.rows().enumerate() {
        let letters: Vec<String> = row.iter().map(char::to_string).collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{row_number:<3}"), label),
            Span::styled(
                letters.join("  "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|report| {
            let style = if report.is_correct() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format_turn(report)).style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Scores
            Constraint::Percentage(50), // Remaining words
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_scores(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .scores()
        .iter()
        .map(|&(player, score, current)| {
            let (marker, style) = if current {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{player:<12}"), style),
                Span::styled(format!("{score:>5}"), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Scores ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_words();
    let found = app.puzzle.words().len() - remaining.len();

    let content: Vec<Line> = if remaining.is_empty() {
        vec![Line::from("All words found!")]
    } else {
        remaining
            .iter()
            .map(|word| {
                let style = if app.pending_word.as_ref() == Some(word) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(Span::styled(format!("  • {word}"), style))
            })
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(
                    " Words ({found}/{} found) ",
                    app.puzzle.words().len()
                ))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

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
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let player = app.game.current_player();
    let (title, color) = match app.input_mode {
        InputMode::Word => (format!(" {player}, enter a word | ESC to quit "), Color::Yellow),
        InputMode::Direction => (
            " Direction (forward, backward, up, down) | ESC to cancel ".to_string(),
            Color::Cyan,
        ),
        InputMode::Index => {
            let axis = app
                .pending_direction
                .map_or_else(|| "row".to_string(), |d| d.axis().to_string());
            (format!(" Enter the {axis} number | ESC to cancel "), Color::Cyan)
        }
        InputMode::GameOver => (
            " 🎉 GAME OVER 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | P1 wins: {} | P2 wins: {} | Ties: {}",
        app.stats.total_games, app.stats.player_one_wins, app.stats.player_two_wins, app.stats.ties
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | ESC: Cancel/Quit | Ctrl-C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
