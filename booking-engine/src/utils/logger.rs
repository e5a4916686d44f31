//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the engine and for tests.

use std::path::Path;

/// Initialize the logger at `info` level on stdout
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily rolling file output
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir.map(|dir| (dir, existing_dir(dir))) {
        Some((_, Some(dir))) => {
            let file_appender = tracing_appender::rolling::daily(dir, "booking-engine");
            let _ = subscriber.with_writer(file_appender).try_init();
        }
        Some((dir, None)) => {
            let _ = subscriber.try_init();
            tracing::warn!(log_dir = %dir, "Log directory does not exist, logging to stdout");
        }
        None => {
            let _ = subscriber.try_init();
        }
    }
}

/// `dir` if it exists and is valid UTF-8
fn existing_dir(dir: &str) -> Option<&str> {
    let log_path = Path::new(dir);
    if log_path.is_dir() {
        log_path.to_str()
    } else {
        None
    }
}

/// Initialize the logger from an [`EngineConfig`](crate::EngineConfig)
pub fn init_from_config(config: &crate::EngineConfig) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}
