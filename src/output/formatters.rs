//! Formatting utilities for terminal output

use crate::core::{Grid, Player, TurnReport};
use crate::solver::Placement;
use std::fmt::Write;

/// Format the grid with column numbers across the top and row numbers down the side
///
/// Letters are separated by two spaces so each column lines up under its number.
///
/// # Examples
/// ```
/// use wheres_that_word::core::Grid;
/// use wheres_that_word::output::formatters::format_grid;
///
/// let grid = Grid::new(["abc", "def"]).unwrap();
/// assert_eq!(format_grid(&grid), "   0  1  2\n0  a  b  c\n1  d  e  f\n");
/// ```
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    let mut result = String::from("   ");
    for col in 0..grid.col_count() {
        let _ = write!(result, "{col:<3}");
    }
    result.truncate(result.trim_end().len());
    result.push('\n');

    for (row_number, row) in grid.rows().enumerate() {
        let letters: Vec<String> = row.iter().map(char::to_string).collect();
        let _ = writeln!(result, "{row_number:<3}{}", letters.join("  "));
    }

    result
}

/// Format the words left to find on one line
#[must_use]
pub fn format_words(words: &[String]) -> String {
    words.join(" ")
}

/// Format a player's running score
#[must_use]
pub fn format_score(player: Player, score: u32) -> String {
    format!("{player}'s score is {score}")
}

/// One-line summary of a turn, e.g. `player one: crate down 0 (+10)`
#[must_use]
pub fn format_turn(report: &TurnReport) -> String {
    let mark = if report.is_correct() {
        format!("+{}", report.points)
    } else {
        "miss".to_string()
    };
    format!(
        "{}: {} {} {} ({mark})",
        report.player, report.word, report.direction, report.index
    )
}

/// Format placements as a comma-separated list
#[must_use]
pub fn format_placements(placements: &[Placement]) -> String {
    placements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn grid_with_headings() {
        let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
        assert_eq!(
            format_grid(&grid),
            "   0  1  2  3\n0  a  b  c  d\n1  e  f  g  h\n2  i  j  k  l\n"
        );
    }

    #[test]
    fn wide_grid_headings_stay_aligned() {
        let grid = Grid::new(["abcdefghijk"]).unwrap();
        let text = format_grid(&grid);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert_eq!(header.find("10"), row.find('k'));
    }

    #[test]
    fn words_on_one_line() {
        let words = vec!["dan".to_string(), "paul".to_string()];
        assert_eq!(format_words(&words), "dan paul");
        assert_eq!(format_words(&[]), "");
    }

    #[test]
    fn score_line() {
        assert_eq!(format_score(Player::Two, 21), "player two's score is 21");
    }

    #[test]
    fn turn_lines() {
        let mut report = TurnReport {
            player: Player::One,
            word: "crate".to_string(),
            direction: Direction::Down,
            index: 0,
            points: 10,
            total: 10,
        };
        assert_eq!(format_turn(&report), "player one: crate down 0 (+10)");

        report.points = 0;
        assert_eq!(format_turn(&report), "player one: crate down 0 (miss)");
    }

    #[test]
    fn placements_list() {
        let placements = [
            Placement {
                direction: Direction::Forward,
                index: 1,
            },
            Placement {
                direction: Direction::Down,
                index: 3,
            },
        ];
        assert_eq!(
            format_placements(&placements),
            "forward row 1, down column 3"
        );
    }
}
