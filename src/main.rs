//! Where's That Word? - CLI
//!
//! Two-player word search with TUI and plain console modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wheres_that_word::{
    commands::{CheckConfig, check_guess, run_simple, solve_puzzle},
    core::Puzzle,
    logging::setup_logging,
    output::{print_check_result, print_puzzle, print_solve_report},
    puzzles::{DEFAULT_PUZZLE, loader::load_puzzle},
};

#[derive(Parser)]
#[command(
    name = "wheres_that_word",
    about = "Two-player word search: find the hidden words, name their direction and line",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: 'puzzle1' (default), 'puzzle2', 'random', or path to a puzzle file
    #[arg(short, long, global = true, default_value = DEFAULT_PUZZLE)]
    puzzle: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (prompts on stdin/stdout)
    Simple,

    /// Print the puzzle and where every word is hidden
    Solve,

    /// Score a single guess against the puzzle
    Check {
        /// The guessed word
        word: String,

        /// Direction: forward, backward, up, down
        direction: String,

        /// Row number (forward/backward) or column number (up/down)
        index: usize,

        /// Words left including this one (default: all puzzle words)
        #[arg(short, long)]
        remaining: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_file.as_deref())?;

    let puzzle = load_puzzle(&cli.puzzle)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&puzzle),
        Commands::Simple => run_simple(&puzzle).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve => {
            run_solve_command(&puzzle);
            Ok(())
        }
        Commands::Check {
            word,
            direction,
            index,
            remaining,
        } => run_check_command(&puzzle, word, direction, index, remaining),
    }
}

fn run_solve_command(puzzle: &Puzzle) {
    print_puzzle(puzzle);
    let report = solve_puzzle(puzzle);
    print_solve_report(&report);
}

fn run_check_command(
    puzzle: &Puzzle,
    word: String,
    direction: String,
    index: usize,
    remaining: Option<usize>,
) -> Result<()> {
    let mut config = CheckConfig::new(word, direction, index);
    if let Some(remaining) = remaining {
        config = config.with_remaining(remaining);
    }

    let result = check_guess(puzzle, config).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(puzzle: &Puzzle) -> Result<()> {
    use wheres_that_word::interactive::{App, run_tui};

    let app = App::new(puzzle);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_first_puzzle() {
        let cli = Cli::parse_from(["wheres_that_word"]);
        assert_eq!(cli.puzzle, DEFAULT_PUZZLE);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from([
            "wheres_that_word",
            "-vv",
            "--puzzle",
            "random",
            "check",
            "crate",
            "down",
            "0",
            "-r",
            "3",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.puzzle, "random");
        match cli.command {
            Some(Commands::Check {
                word,
                direction,
                index,
                remaining,
            }) => {
                assert_eq!(word, "crate");
                assert_eq!(direction, "down");
                assert_eq!(index, 0);
                assert_eq!(remaining, Some(3));
            }
            _ => panic!("expected check command"),
        }
    }
}
