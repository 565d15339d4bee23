//! TUI application state and logic

use crate::core::{Direction, Game, Outcome, Player, Puzzle, TurnReport};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub puzzle: &'a Puzzle,
    pub game: Game,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending_word: Option<String>,
    pub pending_direction: Option<Direction>,
    pub history: Vec<TurnReport>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Which part of a guess is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Word,
    Direction,
    Index,
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

/// Results across games played this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub ties: usize,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        match outcome {
            Outcome::PlayerOneWins => self.player_one_wins += 1,
            Outcome::PlayerTwoWins => self.player_two_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            game: Game::from_puzzle(puzzle),
            input_mode: InputMode::Word,
            input_buffer: String::new(),
            pending_word: None,
            pending_direction: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome to Where's That Word!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "player one's turn: enter a word from the list".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle Enter: validate the buffer for the current stage of the guess
    pub fn submit(&mut self) {
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        match self.input_mode {
            InputMode::Word => self.submit_word(input),
            InputMode::Direction => self.submit_direction(&input),
            InputMode::Index => self.submit_index(&input),
            InputMode::GameOver => {}
        }
    }

    fn submit_word(&mut self, word: String) {
        if self.game.is_remaining(&word) {
            self.add_message(
                &format!("Which direction is '{word}'? ({})", Direction::names()),
                MessageStyle::Info,
            );
            self.pending_word = Some(word);
            self.input_mode = InputMode::Direction;
        } else {
            self.add_message(
                &format!("'{word}' is not one of the remaining words"),
                MessageStyle::Error,
            );
        }
    }

    fn submit_direction(&mut self, input: &str) {
        match input.parse::<Direction>() {
            Ok(direction) => {
                self.add_message(
                    &format!(
                        "Which {}? (0-{})",
                        direction.axis(),
                        self.game.bound_for(direction) - 1
                    ),
                    MessageStyle::Info,
                );
                self.pending_direction = Some(direction);
                self.input_mode = InputMode::Index;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn submit_index(&mut self, input: &str) {
        let (Some(word), Some(direction)) = (self.pending_word.clone(), self.pending_direction)
        else {
            self.reset_guess();
            return;
        };

        let bound = self.game.bound_for(direction);
        let index = match input.parse::<usize>() {
            Ok(index) if index < bound => index,
            _ => {
                self.add_message(
                    &format!("Enter a {} number from 0 to {}", direction.axis(), bound - 1),
                    MessageStyle::Error,
                );
                return;
            }
        };

        match self.game.take_turn(&word, direction, index) {
            Ok(report) => self.finish_turn(report),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.reset_guess();
            }
        }
    }

    fn finish_turn(&mut self, report: TurnReport) {
        if report.is_correct() {
            self.add_message(
                &format!(
                    "Correct! {} earns {} points for '{}'",
                    report.player, report.points, report.word
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Incorrect guess: '{}' isn't there", report.word),
                MessageStyle::Error,
            );
        }
        debug!(player = %report.player, points = report.points, "TUI turn finished");
        self.history.push(report);
        self.reset_guess();

        if let Some(outcome) = self.game.outcome() {
            self.stats.record(outcome);
            self.input_mode = InputMode::GameOver;
            self.add_message(&format!("🎉 woohoo!!! {outcome}!!!"), MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!("{}'s turn", self.game.current_player()),
                MessageStyle::Info,
            );
        }
    }

    fn reset_guess(&mut self) {
        self.pending_word = None;
        self.pending_direction = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Word;
    }

    /// Handle Esc: drop the guess in progress, or quit if there is none
    pub fn cancel(&mut self) {
        if self.pending_word.is_some() || !self.input_buffer.is_empty() {
            self.reset_guess();
            self.add_message("Guess cancelled", MessageStyle::Info);
        } else {
            self.should_quit = true;
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::from_puzzle(self.puzzle);
        self.history.clear();
        self.messages.clear();
        self.reset_guess();
        self.add_message(
            "New game started! player one goes first.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Score for display, with the player whose turn it is
    #[must_use]
    pub fn scores(&self) -> [(Player, u32, bool); 2] {
        let current = self.game.current_player();
        let playing = self.input_mode != InputMode::GameOver;
        [Player::One, Player::Two].map(|player| {
            (
                player,
                self.game.score(player),
                playing && player == current,
            )
        })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.input_mode == InputMode::GameOver {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {
                        // After the game, ignore other keys
                    }
                }
            } else {
                match key.code {
                    KeyCode::Esc => app.cancel(),
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
