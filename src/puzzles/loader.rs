//! Puzzle loading utilities
//!
//! Resolves a puzzle choice to an embedded puzzle, a random embedded puzzle, or a file.

use super::{PUZZLES, embedded_text};
use crate::core::Puzzle;
use anyhow::{Context, Result, bail};
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;
use tracing::info;

/// Choice that picks one of the embedded puzzles at random
pub const RANDOM: &str = "random";

/// Load a puzzle from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid puzzle.
///
/// # Examples
/// ```no_run
/// use wheres_that_word::puzzles::loader::load_from_file;
///
/// let puzzle = load_from_file("data/puzzle1.txt").unwrap();
/// println!("Loaded {} words", puzzle.words().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file {}", path.display()))?;

    Puzzle::parse(&content).with_context(|| format!("Invalid puzzle file {}", path.display()))
}

/// Load an embedded puzzle by name
///
/// # Errors
///
/// Returns an error if no embedded puzzle has that name.
pub fn load_embedded(name: &str) -> Result<Puzzle> {
    let Some(text) = embedded_text(name) else {
        bail!("No embedded puzzle named '{name}'");
    };
    Puzzle::parse(text).with_context(|| format!("Embedded puzzle '{name}' is invalid"))
}

/// Load the puzzle named by `choice`
///
/// - `"random"`: one of the embedded puzzles, picked at random
/// - an embedded puzzle name such as `"puzzle1"`
/// - anything else is treated as a path to a puzzle file
///
/// # Errors
///
/// Returns an error if the puzzle cannot be read or parsed.
///
/// # Examples
/// ```
/// use wheres_that_word::puzzles::loader::load_puzzle;
///
/// let puzzle = load_puzzle("puzzle1").unwrap();
/// assert!(!puzzle.words().is_empty());
/// ```
pub fn load_puzzle(choice: &str) -> Result<Puzzle> {
    let (name, puzzle) = if choice == RANDOM {
        let &(name, _) = PUZZLES
            .choose(&mut rand::rng())
            .context("No embedded puzzles available")?;
        (name.to_string(), load_embedded(name)?)
    } else if embedded_text(choice).is_some() {
        (choice.to_string(), load_embedded(choice)?)
    } else {
        (choice.to_string(), load_from_file(choice)?)
    };

    info!(
        puzzle = %name,
        rows = puzzle.grid().row_count(),
        cols = puzzle.grid().col_count(),
        words = puzzle.words().len(),
        "Puzzle loaded"
    );

    Ok(puzzle)
}
