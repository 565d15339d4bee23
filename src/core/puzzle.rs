//! Puzzle text format
//!
//! The first line holds the comma-separated words to find; every following
//! line is a row of the grid.

use super::grid::{Grid, GridError};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::warn;

/// A word list together with the grid it's hidden in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    words: Vec<String>,
    grid: Grid,
}

/// Error type for malformed puzzle text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The text is empty
    MissingWordList,
    /// The first line has no words on it
    NoWords,
    /// The grid lines are malformed
    Grid(GridError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWordList => write!(f, "Puzzle is empty, expected a word list line"),
            Self::NoWords => write!(f, "Puzzle word list has no words"),
            Self::Grid(err) => write!(f, "Invalid puzzle grid: {err}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl Puzzle {
    /// Create a puzzle from a grid and its words
    ///
    /// # Errors
    /// Returns `PuzzleError::NoWords` if `words` is empty.
    pub fn new(words: Vec<String>, grid: Grid) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }

        let mut seen = FxHashSet::default();
        for word in &words {
            if !seen.insert(word.as_str()) {
                warn!(word = %word, "Puzzle lists a word more than once");
            }
        }

        Ok(Self { words, grid })
    }

    /// Parse puzzle text
    ///
    /// Words are trimmed and empty entries dropped.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - The text is empty
    /// - The first line contains no words
    /// - The grid is empty or its rows differ in length
    ///
    /// # Examples
    /// ```
    /// use wheres_that_word::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("aei, fgh\nabcd\nefgh\nijkl\n").unwrap();
    /// assert_eq!(puzzle.words(), ["aei", "fgh"]);
    /// assert_eq!(puzzle.grid().row_count(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let (first_line, grid_text) = text
            .split_once('\n')
            .unwrap_or((text, ""));

        if first_line.trim().is_empty() && grid_text.is_empty() {
            return Err(PuzzleError::MissingWordList);
        }

        let words: Vec<String> = first_line
            .split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(ToString::to_string)
            .collect();

        let grid = Grid::parse(grid_text)?;
        Self::new(words, grid)
    }

    /// Words to find, in listed order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
}
