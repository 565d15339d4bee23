//! Where's That Word?
//!
//! A two-player word search game: players take turns naming a hidden word, the
//! direction it runs and the row or column it's on.
//!
//! # Quick Start
//!
//! ```rust
//! use wheres_that_word::core::{Direction, Grid, evaluate_guess};
//!
//! let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
//!
//! // "aei" runs down column 0; with 5 words left that's 5 x 2 points
//! let points = evaluate_guess(&grid, Direction::Down, "aei", 0, 5).unwrap();
//! assert_eq!(points, 10);
//! ```

// Core domain types
pub mod core;

// Word location
pub mod solver;

// Puzzles
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
