//! Command implementations

pub mod check;
pub mod simple;
pub mod solve;

pub use check::{CheckConfig, CheckResult, check_guess};
pub use simple::{play_session, run_simple};
pub use solve::{SolveReport, solve_puzzle};
