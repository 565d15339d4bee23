//! Answer key command
//!
//! Locates every word of a puzzle in its grid.

use crate::core::Puzzle;
use crate::solver::{WordSolution, solve_all};

/// Answer key for a puzzle
pub struct SolveReport {
    pub rows: usize,
    pub cols: usize,
    pub solutions: Vec<WordSolution>,
}

impl SolveReport {
    /// Number of listed words that aren't hidden in the grid
    #[must_use]
    pub fn missing(&self) -> usize {
        self.solutions.iter().filter(|s| !s.is_found()).count()
    }
}

/// Build the answer key for a puzzle
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle) -> SolveReport {
    let grid = puzzle.grid();
    SolveReport {
        rows: grid.row_count(),
        cols: grid.col_count(),
        solutions: solve_all(grid, puzzle.words()),
    }
}
