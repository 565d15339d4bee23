//! Word location
//!
//! Finds where puzzle words are hidden. Used for the answer key and to check
//! that puzzles are solvable.

mod locate;

pub use locate::{Placement, WordSolution, locate_word, solve_all};
