//! File-based tracing setup.
//!
//! The terminal owns stdout, so log output goes to a rolling file instead.
use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with a daily-rolling file writer.
///
/// The returned guard must be kept alive for the process lifetime or
/// buffered log lines are lost.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(log_dir, "gridciv.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
