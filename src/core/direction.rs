//! Guess directions
//!
//! A direction says which line of the grid a word is read along and in which order.
//! Each direction carries a fixed scoring multiplier.

use std::fmt;
use std::str::FromStr;

/// The four directions a word can be hidden in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Forward,
    /// Right to left along a row
    Backward,
    /// Bottom to top along a column
    Up,
    /// Top to bottom along a column
    Down,
}

/// The kind of grid line a direction reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Error type for unparseable direction names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    Unknown(String),
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "Unknown direction '{name}', expected one of: {}",
                Direction::names()
            ),
        }
    }
}

impl std::error::Error for DirectionError {}

impl Direction {
    /// All directions, in prompt order
    pub const ALL: [Self; 4] = [Self::Forward, Self::Backward, Self::Up, Self::Down];

    /// Scoring multiplier for a word found in this direction
    ///
    /// forward=1, down=2, backward=3, up=4.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::Forward => 1,
            Self::Down => 2,
            Self::Backward => 3,
            Self::Up => 4,
        }
    }

    /// Whether this direction reads a row or a column
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Forward | Self::Backward => Axis::Row,
            Self::Up | Self::Down => Axis::Column,
        }
    }

    /// Whether the word runs against the reading order of its line
    #[inline]
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Backward | Self::Up)
    }

    /// Lowercase name used in prompts and on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Comma-separated list of every direction name
    #[must_use]
    pub fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    /// Parse a direction name, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use wheres_that_word::core::Direction;
    ///
    /// assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
    /// assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| DirectionError::Unknown(s.trim().to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.pad("row"),
            Self::Column => f.pad("column"),
        }
    }
}
