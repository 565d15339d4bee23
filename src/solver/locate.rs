//! Placement search
//!
//! A word is placed at (direction, index) exactly when a guess with that
//! direction and index would score points.

use crate::core::{Direction, Grid, evaluate_guess};
use rayon::prelude::*;
use std::fmt;
use tracing::warn;

/// A direction and line index where a word can be guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub direction: Direction,
    pub index: usize,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.direction,
            self.direction.axis(),
            self.index
        )
    }
}

/// Every placement found for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSolution {
    pub word: String,
    pub placements: Vec<Placement>,
}

impl WordSolution {
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.placements.is_empty()
    }
}

/// Find every placement of `word` in `grid`
///
/// Placements are ordered by direction (forward, backward, up, down) and then index.
///
/// # Examples
/// ```
/// use wheres_that_word::core::{Direction, Grid};
/// use wheres_that_word::solver::{Placement, locate_word};
///
/// let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
/// assert_eq!(
///     locate_word(&grid, "aei"),
///     vec![Placement { direction: Direction::Down, index: 0 }]
/// );
/// ```
#[must_use]
pub fn locate_word(grid: &Grid, word: &str) -> Vec<Placement> {
    Direction::ALL
        .into_iter()
        .flat_map(|direction| {
            (0..grid.line_count(direction.axis())).map(move |index| Placement { direction, index })
        })
        .filter(|placement| {
            // Any words-left count works here; only nonzero matters
            evaluate_guess(grid, placement.direction, word, placement.index, 1)
                .is_ok_and(|points| points > 0)
        })
        .collect()
}

/// Locate every word, in parallel
///
/// Results keep the order of `words`.
#[must_use]
pub fn solve_all(grid: &Grid, words: &[String]) -> Vec<WordSolution> {
    let solutions: Vec<WordSolution> = words
        .par_iter()
        .map(|word| WordSolution {
            word: word.clone(),
            placements: locate_word(grid, word),
        })
        .collect();

    for solution in solutions.iter().filter(|s| !s.is_found()) {
        warn!(word = %solution.word, "Word is not hidden in the grid");
    }

    solutions
}
