//! Interactive TUI interface
//!
//! Full-screen two-player game built on ratatui.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
