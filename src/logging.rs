//! Logging setup
//!
//! Installs a tracing subscriber writing to stderr, or to a file so the
//! full-screen interface isn't drawn over.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Map a `-v` count to a level: warnings by default, then info, debug, trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file can't be created or a subscriber is
/// already installed.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let level_filter = level_for(verbosity);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install logger")
}
