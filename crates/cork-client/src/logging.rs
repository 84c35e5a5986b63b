//! File logging setup.
//!
//! The TUI owns the terminal's alternate screen, so diagnostics go to
//! `<CORK_HOME>/logs/cork.log` instead of stderr. `CORK_LOG` controls the
//! filter (default `info`).

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging and returns the writer guard.
///
/// The guard must be held for the lifetime of the process; dropping it stops
/// the background writer and loses buffered lines.
pub fn init() -> Result<WorkerGuard> {
    let dir = crate::config::paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, "cork.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("CORK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init in the same process (tests) is harmless; keep the guard
    // from this call either way.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
