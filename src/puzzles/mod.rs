//! Puzzles for the word search game
//!
//! Provides the puzzles compiled into the binary and loading of puzzle files.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};

/// Puzzle played when none is chosen
pub const DEFAULT_PUZZLE: &str = "puzzle1";

/// Look up an embedded puzzle's text by name
#[must_use]
pub fn embedded_text(name: &str) -> Option<&'static str> {
    PUZZLES
        .iter()
        .find(|(puzzle_name, _)| *puzzle_name == name)
        .map(|&(_, text)| text)
}
