//! Core domain types for the word search game
//!
//! This module contains the grid, directions, scoring rules and game state.
//! Everything here is pure apart from tracing events and is independent of any terminal.

mod direction;
mod game;
mod grid;
mod puzzle;
mod scoring;

pub use direction::{Axis, Direction, DirectionError};
pub use game::{Game, Outcome, Player, TurnError, TurnReport, current_player, winner};
pub use grid::{Grid, GridError};
pub use puzzle::{Puzzle, PuzzleError};
pub use scoring::{BONUS, ScoreTier, THRESHOLD, TIERS, evaluate_guess, points, reverse, tier_for};
