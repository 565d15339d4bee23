//! Simple interactive CLI mode
//!
//! Text-based two-player game without TUI

use crate::core::{Direction, Game, Outcome, Player, Puzzle};
use crate::output::formatters::{format_grid, format_score, format_words};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if input
/// ends before the game is over.
pub fn run_simple(puzzle: &Puzzle) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut game = Game::from_puzzle(puzzle);
    play_session(&mut game, &mut input, &mut output)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Play `game` to the end, reading answers from `input` and writing prompts to `output`
///
/// Invalid answers are re-prompted until valid.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if `input` ends early.
pub fn play_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<Outcome> {
    writeln!(output, "{}", "*".repeat(39).bright_cyan())?;
    writeln!(
        output,
        "{}",
        "**       Where's That Word?          **".bright_cyan().bold()
    )?;
    writeln!(output, "{}", "*".repeat(39).bright_cyan())?;

    while !game.is_over() {
        writeln!(output, "{}", format_grid(game.grid()))?;
        writeln!(output, "the words left to be found: ")?;
        writeln!(output, "{}\n", format_words(game.remaining_words()))?;

        let player = game.current_player();
        writeln!(output, "{player}'s turn")?;

        let guess = get_guess(game, player, input, output)?;
        let direction = get_direction(player, input, output)?;
        let index = get_line_index(game, direction, &guess, input, output)?;

        let report = game
            .take_turn(&guess, direction, index)
            .map_err(io::Error::other)?;

        if report.is_correct() {
            writeln!(output, "{}", "correct guess!!!".green().bold())?;
        } else {
            writeln!(output, "{}", "incorrect guess :-(".red())?;
        }
        writeln!(output, "{}\n", format_score(report.player, report.total))?;
    }

    let outcome = game
        .outcome()
        .ok_or_else(|| io::Error::other("game ended with words remaining"))?;

    writeln!(
        output,
        "woohoo!!! {}",
        format!("{outcome}!!!").bright_yellow().bold()
    )?;
    writeln!(
        output,
        "final scores: {} {}, {} {}",
        Player::One,
        game.score(Player::One),
        Player::Two,
        game.score(Player::Two)
    )?;

    Ok(outcome)
}

/// Keep prompting until the player names a remaining word
fn get_guess<R: BufRead, W: Write>(
    game: &Game,
    player: Player,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    loop {
        let guess = get_user_input(&format!("{player}, please enter a word"), input, output)?;
        if game.is_remaining(&guess) {
            return Ok(guess);
        }
    }
}

/// Keep prompting until the player names a valid direction
fn get_direction<R: BufRead, W: Write>(
    player: Player,
    input: &mut R,
    output: &mut W,
) -> io::Result<Direction> {
    let prompt = format!("{player}, enter the direction ({})", Direction::names());
    loop {
        if let Ok(direction) = get_user_input(&prompt, input, output)?.parse() {
            return Ok(direction);
        }
    }
}

/// Keep prompting until the player gives a row/column number inside the grid
fn get_line_index<R: BufRead, W: Write>(
    game: &Game,
    direction: Direction,
    guess: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    let bound = game.bound_for(direction);
    let prompt = format!("enter the {} number where {guess} occurs", direction.axis());
    loop {
        if let Ok(index) = get_user_input(&prompt, input, output)?.parse::<usize>()
            && index < bound
        {
            return Ok(index);
        }
    }
}

/// Get user input with a prompt
fn get_user_input<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the game was over",
        ));
    }

    Ok(line.trim().to_string())
}
