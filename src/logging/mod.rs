//! Logging setup
//!
//! Console output is env-filtered; warnings and errors are additionally
//! written to a daily-rotating file so failed upstream calls leave a trace
//! after the fact.

use crate::config::LoggingSettings;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Initialize the global subscriber.
///
/// Returns the appender guard; dropping it stops the background log
/// writer, so the caller must hold it for the lifetime of the process.
pub fn init(settings: &LoggingSettings) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(settings.file_prefix.as_str())
        .max_log_files(settings.max_files)
        .build(&settings.directory)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer().with_target(false).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );

    // Only failures go to the file, matching its role as a failure trail
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
