//! Guess scoring
//!
//! A correct guess earns points from a tier keyed by how many words are left,
//! multiplied by the direction's factor. The tiers form a step function:
//!
//! | Words left | Points       |
//! |------------|--------------|
//! | 5 or more  | `5m`         |
//! | 2 to 4     | `8m`         |
//! | 1 (last)   | `9m + 12`    |

use super::direction::Direction;
use super::grid::{Grid, GridError};

/// Words-left count at which the early tier starts
pub const THRESHOLD: u32 = 5;

/// Flat bonus for finding the last word
pub const BONUS: u32 = 12;

/// One row of the scoring table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTier {
    /// Smallest words-left count this tier applies to
    pub min_remaining: usize,
    /// Base points, multiplied by the direction factor
    pub base: u32,
    /// Points added after multiplying
    pub bonus: u32,
}

/// Scoring tiers, checked in order; the first whose minimum is met applies
pub static TIERS: [ScoreTier; 3] = [
    ScoreTier {
        min_remaining: THRESHOLD as usize,
        base: THRESHOLD,
        bonus: 0,
    },
    ScoreTier {
        min_remaining: 2,
        base: 2 * THRESHOLD - 2,
        bonus: 0,
    },
    ScoreTier {
        min_remaining: 0,
        base: 2 * THRESHOLD - 1,
        bonus: BONUS,
    },
];

impl ScoreTier {
    /// Points this tier awards for a direction
    #[inline]
    #[must_use]
    pub const fn award(&self, direction: Direction) -> u32 {
        self.base * direction.factor() + self.bonus
    }
}

/// Find the tier for a words-left count
#[must_use]
pub fn tier_for(words_remaining: usize) -> &'static ScoreTier {
    TIERS
        .iter()
        .find(|tier| words_remaining >= tier.min_remaining)
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Points for a correct guess in `direction` with `words_remaining` words left
/// (counting the word just found)
///
/// # Examples
/// ```
/// use wheres_that_word::core::{Direction, points};
///
/// assert_eq!(points(Direction::Backward, 5), 15);
/// assert_eq!(points(Direction::Forward, 3), 8);
/// assert_eq!(points(Direction::Up, 1), 48);
/// ```
#[must_use]
pub fn points(direction: Direction, words_remaining: usize) -> u32 {
    tier_for(words_remaining).award(direction)
}

/// Reverse the characters of a word
#[must_use]
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Score a guess against the grid
///
/// Reads row `line_index` for forward/backward and column `line_index` for
/// up/down. Backward and up guesses are reversed before searching. Returns 0
/// when the word is not on that line.
///
/// # Errors
/// Returns `GridError::OutOfRange` if `line_index` is past the edge of the grid.
///
/// # Examples
/// ```
/// use wheres_that_word::core::{Direction, Grid, evaluate_guess};
///
/// let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
///
/// assert_eq!(evaluate_guess(&grid, Direction::Down, "aei", 0, 5), Ok(10));
/// assert_eq!(evaluate_guess(&grid, Direction::Up, "aei", 0, 5), Ok(0));
/// assert_eq!(evaluate_guess(&grid, Direction::Up, "iea", 0, 5), Ok(20));
/// ```
pub fn evaluate_guess(
    grid: &Grid,
    direction: Direction,
    word: &str,
    line_index: usize,
    words_remaining: usize,
) -> Result<u32, GridError> {
    let line = grid.line(direction, line_index)?;

    let found = if direction.is_reversed() {
        line.contains(&reverse(word))
    } else {
        line.contains(word)
    };

    Ok(if found {
        points(direction, words_remaining)
    } else {
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::new(["abcd", "efgh", "ijkl"]).unwrap()
    }

    #[test]
    fn tier_boundaries() {
        for direction in Direction::ALL {
            let m = direction.factor();
            assert_eq!(points(direction, 100), 5 * m);
            assert_eq!(points(direction, 5), 5 * m);
            assert_eq!(points(direction, 4), 8 * m);
            assert_eq!(points(direction, 2), 8 * m);
            assert_eq!(points(direction, 1), 9 * m + 12);
            assert_eq!(points(direction, 0), 9 * m + 12);
        }
    }

    #[test]
    fn tier_values_per_direction() {
        assert_eq!(points(Direction::Forward, 5), 5);
        assert_eq!(points(Direction::Down, 5), 10);
        assert_eq!(points(Direction::Backward, 5), 15);
        assert_eq!(points(Direction::Up, 5), 20);

        assert_eq!(points(Direction::Forward, 1), 21);
        assert_eq!(points(Direction::Down, 1), 30);
        assert_eq!(points(Direction::Backward, 1), 39);
        assert_eq!(points(Direction::Up, 1), 48);
    }

    #[test]
    fn middle_tier_beats_early_tier_and_last_word_beats_both() {
        for direction in Direction::ALL {
            assert!(points(direction, 5) < points(direction, 4));
            assert!(points(direction, 2) < points(direction, 1));
        }
    }

    #[test]
    fn tier_table_is_ordered() {
        assert!(
            TIERS
                .windows(2)
                .all(|pair| pair[0].min_remaining > pair[1].min_remaining)
        );
        assert_eq!(TIERS[TIERS.len() - 1].min_remaining, 0);
    }

    #[test]
    fn tier_lookup() {
        assert_eq!(tier_for(7), &TIERS[0]);
        assert_eq!(tier_for(3), &TIERS[1]);
        assert_eq!(tier_for(1), &TIERS[2]);
    }

    #[test]
    fn reverse_words() {
        assert_eq!(reverse("aei"), "iea");
        assert_eq!(reverse("a"), "a");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn reverse_twice_is_identity() {
        for word in ["", "x", "level", "crate", "borrow checker", "naïve"] {
            assert_eq!(reverse(&reverse(word)), word);
        }
    }

    #[test]
    fn down_example() {
        assert_eq!(evaluate_guess(&sample(), Direction::Down, "aei", 0, 5), Ok(10));
    }

    #[test]
    fn up_requires_reversed_word() {
        let grid = sample();
        assert_eq!(evaluate_guess(&grid, Direction::Up, "aei", 0, 5), Ok(0));
        assert_eq!(evaluate_guess(&grid, Direction::Up, "iea", 0, 5), Ok(20));
        assert_eq!(evaluate_guess(&grid, Direction::Up, "lh", 3, 5), Ok(20));
    }

    #[test]
    fn forward_matches_row_substring() {
        let grid = sample();
        assert_eq!(evaluate_guess(&grid, Direction::Forward, "fgh", 1, 9), Ok(5));
        assert_eq!(evaluate_guess(&grid, Direction::Forward, "fgh", 0, 9), Ok(0));
        assert_eq!(evaluate_guess(&grid, Direction::Forward, "hgf", 1, 9), Ok(0));
    }

    #[test]
    fn backward_matches_reversed_row_substring() {
        let grid = sample();
        assert_eq!(evaluate_guess(&grid, Direction::Backward, "kji", 2, 3), Ok(24));
        assert_eq!(evaluate_guess(&grid, Direction::Backward, "ijk", 2, 3), Ok(0));
    }

    #[test]
    fn scoring_uses_words_remaining() {
        let grid = sample();
        assert_eq!(evaluate_guess(&grid, Direction::Down, "bfj", 1, 4), Ok(16));
        assert_eq!(evaluate_guess(&grid, Direction::Down, "bfj", 1, 1), Ok(30));
    }

    #[test]
    fn absent_word_scores_zero_in_every_tier() {
        let grid = sample();
        for remaining in [0, 1, 2, 4, 5, 10] {
            for direction in Direction::ALL {
                assert_eq!(evaluate_guess(&grid, direction, "zzz", 0, remaining), Ok(0));
            }
        }
    }

    #[test]
    fn nonzero_iff_contained() {
        let grid = sample();
        for direction in Direction::ALL {
            let count = grid.line_count(direction.axis());
            for index in 0..count {
                let line = grid.line(direction, index).unwrap();
                for word in ["ab", "ei", "fg", "jf", "kl", "hd", "lkji", "x"] {
                    let target = if direction.is_reversed() {
                        reverse(word)
                    } else {
                        word.to_string()
                    };
                    let score = evaluate_guess(&grid, direction, word, index, 5).unwrap();
                    assert_eq!(score != 0, line.contains(&target), "{direction} {index} {word}");
                }
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let grid = sample();
        let first = evaluate_guess(&grid, Direction::Backward, "hgfe", 1, 2);
        let second = evaluate_guess(&grid, Direction::Backward, "hgfe", 1, 2);
        assert_eq!(first, Ok(24));
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let grid = sample();
        assert!(matches!(
            evaluate_guess(&grid, Direction::Forward, "abc", 3, 5),
            Err(GridError::OutOfRange { .. })
        ));
        assert!(matches!(
            evaluate_guess(&grid, Direction::Up, "abc", 4, 5),
            Err(GridError::OutOfRange { .. })
        ));
    }
}
