use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "vendor_import.log";

/// Daily-rotated log file in `dir`, written off the main thread.
///
/// Lines still queued are written when the returned guard is dropped.
pub fn file_writer(dir: &Path) -> (NonBlocking, WorkerGuard) {
    let _ = fs::create_dir_all(dir);
    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    tracing_appender::non_blocking(file_appender)
}

/// Initializes the logging system with both console and file output.
///
/// The caller must hold the returned guard until the process exits.
#[must_use = "dropping the guard stops the file writer"]
pub fn init_logging() -> WorkerGuard {
    let (non_blocking_writer, guard) = file_writer(Path::new(LOG_DIR));

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    // Console output goes to stderr so it does not interleave with the report on stdout
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vendor_import=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
