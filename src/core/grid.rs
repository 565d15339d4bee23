//! Letter grid representation
//!
//! The grid is stored as a rectangle of characters and is never mutated after
//! construction. Lines are read out as owned strings so they can be searched directly.

use super::direction::{Axis, Direction};
use std::fmt;

/// An immutable rectangular block of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

/// Error type for malformed grids and out-of-range lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no letters
    Empty,
    /// A row whose length differs from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row or column index past the edge of the grid
    OutOfRange { axis: Axis, index: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {row} has {found} letters, expected {expected}"
            ),
            Self::OutOfRange { axis, index, len } => {
                write!(f, "No {axis} {index}: grid has {len} {axis}s (0-{})", len - 1)
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from its rows
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - There are no rows, or the rows are empty
    /// - Any row differs in length from the first
    ///
    /// # Examples
    /// ```
    /// use wheres_that_word::core::Grid;
    ///
    /// let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
    /// assert_eq!(grid.row_count(), 3);
    /// assert_eq!(grid.col_count(), 4);
    ///
    /// assert!(Grid::new(["abcd", "efg"]).is_err());
    /// ```
    pub fn new<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let cols = cells.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self { cells, cols })
    }

    /// Create a grid from newline-delimited text
    ///
    /// Carriage returns are stripped and trailing blank lines ignored.
    ///
    /// # Errors
    /// Same conditions as [`Grid::new`].
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        Self::new(lines)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.cols
    }

    /// Number of lines along an axis
    #[inline]
    #[must_use]
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.col_count(),
        }
    }

    /// Get the letters of row `index`, left to right
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` if `index >= row_count()`.
    pub fn row(&self, index: usize) -> Result<String, GridError> {
        self.cells
            .get(index)
            .map(|row| row.iter().collect())
            .ok_or(GridError::OutOfRange {
                axis: Axis::Row,
                index,
                len: self.row_count(),
            })
    }

    /// Get the letters of column `index`, top to bottom
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` if `index >= col_count()`.
    ///
    /// # Examples
    /// ```
    /// use wheres_that_word::core::Grid;
    ///
    /// let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
    /// assert_eq!(grid.column(1).unwrap(), "bfj");
    /// ```
    pub fn column(&self, index: usize) -> Result<String, GridError> {
        if index >= self.cols {
            return Err(GridError::OutOfRange {
                axis: Axis::Column,
                index,
                len: self.cols,
            });
        }

        Ok(self.cells.iter().map(|row| row[index]).collect())
    }

    /// Get the line a direction reads at `index`: a row for forward/backward,
    /// a column for up/down
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` if `index` is past the edge of the grid.
    pub fn line(&self, direction: Direction, index: usize) -> Result<String, GridError> {
        match direction.axis() {
            Axis::Row => self.row(index),
            Axis::Column => self.column(index),
        }
    }

    /// Iterate over the rows as character slices
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
