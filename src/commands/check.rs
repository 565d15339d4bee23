//! Single guess scoring command
//!
//! Scores one guess against a puzzle without playing a game.

use crate::core::{Direction, Puzzle, evaluate_guess};

/// Configuration for scoring one guess
pub struct CheckConfig {
    pub word: String,
    pub direction: String,
    pub index: usize,
    /// Words left including this one; defaults to the puzzle's word count
    pub remaining: Option<usize>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(word: String, direction: String, index: usize) -> Self {
        Self {
            word,
            direction,
            index,
            remaining: None,
        }
    }

    #[must_use]
    pub fn with_remaining(mut self, remaining: usize) -> Self {
        self.remaining = Some(remaining);
        self
    }
}

/// Result of scoring one guess
#[derive(Debug)]
pub struct CheckResult {
    pub word: String,
    pub direction: Direction,
    pub index: usize,
    pub remaining: usize,
    /// The row or column that was searched
    pub line: String,
    pub points: u32,
}

/// Score a guess against a puzzle
///
/// # Errors
///
/// Returns an error if:
/// - The direction is not one of forward, backward, up, down
/// - The index is past the edge of the grid
pub fn check_guess(puzzle: &Puzzle, config: CheckConfig) -> Result<CheckResult, String> {
    let direction: Direction = config.direction.parse().map_err(|e| format!("{e}"))?;
    let remaining = config.remaining.unwrap_or(puzzle.words().len());

    let grid = puzzle.grid();
    let line = grid
        .line(direction, config.index)
        .map_err(|e| e.to_string())?;
    let points = evaluate_guess(grid, direction, &config.word, config.index, remaining)
        .map_err(|e| e.to_string())?;

    Ok(CheckResult {
        word: config.word,
        direction,
        index: config.index,
        remaining,
        line,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Puzzle {
        Puzzle::parse("aei,fgh,dhl,kji,ab\nabcd\nefgh\nijkl\n").unwrap()
    }

    #[test]
    fn check_correct_guess() {
        let config = CheckConfig::new("aei".to_string(), "down".to_string(), 0);
        let result = check_guess(&sample(), config).unwrap();

        assert_eq!(result.direction, Direction::Down);
        assert_eq!(result.remaining, 5);
        assert_eq!(result.line, "aei");
        assert_eq!(result.points, 10);
    }

    #[test]
    fn check_with_remaining_override() {
        let config =
            CheckConfig::new("kji".to_string(), "BACKWARD".to_string(), 2).with_remaining(1);
        let result = check_guess(&sample(), config).unwrap();
        assert_eq!(result.points, 39);
    }

    #[test]
    fn check_incorrect_guess() {
        let config = CheckConfig::new("aei".to_string(), "up".to_string(), 0);
        let result = check_guess(&sample(), config).unwrap();
        assert_eq!(result.points, 0);
    }

    #[test]
    fn check_rejects_unknown_direction() {
        let config = CheckConfig::new("aei".to_string(), "diagonal".to_string(), 0);
        let err = check_guess(&sample(), config).unwrap_err();
        assert!(err.contains("diagonal"));
    }

    #[test]
    fn check_rejects_out_of_range_index() {
        let config = CheckConfig::new("aei".to_string(), "forward".to_string(), 3);
        let err = check_guess(&sample(), config).unwrap_err();
        assert!(err.contains("No row 3"));
    }
}
