//! Tracing subscriber setup
//!
//! Line-mode commands log to stderr. The TUI owns the terminal, so it logs to
//! a file in the data directory instead. `RUST_LOG` overrides the level.

use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Log file name inside the data directory
pub const LOG_FILE: &str = "puzzle.log";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "sequence_puzzle=debug"
        } else {
            DEFAULT_FILTER
        })
    })
}

/// Log to stderr
pub fn init_stderr(verbose: bool) {
    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `<data dir>/sequence-puzzle/puzzle.log`
///
/// The returned guard flushes buffered lines when dropped, so hold it for the
/// lifetime of the TUI. Falls back to stderr when there is no data directory.
#[must_use]
pub fn init_file(verbose: bool) -> Option<WorkerGuard> {
    let Some(dir) = log_dir() else {
        init_stderr(verbose);
        return None;
    };

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Some(guard)
}

fn log_dir() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("sequence-puzzle");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
