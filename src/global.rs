//! Process-wide default logger
//!
//! Applications that don't want to pass a [`Logger`] around can install one
//! default instance at startup. Initialization happens at most once: the
//! first call to [`init`] decides the configuration, and later calls are
//! ignored. Every function here is a silent no-op until a default logger
//! exists.
//!
//! ```no_run
//! use rust_rotating_logger::global;
//! use rust_rotating_logger::{log_info, LogLevel};
//!
//! global::init_both(LogLevel::Info, LogLevel::Debug, "logs/app.log", 10 * 1024 * 1024)
//!     .expect("cannot open log file");
//!
//! log_info!("service started on port {}", 8080);
//!
//! global::close().ok();
//! ```

use crate::core::{LogLevel, Logger, LoggerConfig, Result, SourceLocation};
use std::path::PathBuf;
use std::sync::{Once, OnceLock};

static INIT: Once = Once::new();
static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Build the default logger from `config`, unless initialization already ran
///
/// Only the first call does anything. If that call fails, its error is
/// returned and no default logger is ever installed.
///
/// # Errors
///
/// Construction of the logger failed; see [`Logger::new`].
pub fn init(config: LoggerConfig) -> Result<()> {
    let mut result = Ok(());
    INIT.call_once(|| match Logger::new(config) {
        Ok(logger) => {
            let _ = DEFAULT_LOGGER.set(logger);
        }
        Err(e) => result = Err(e),
    });
    result
}

/// Install a console-only default logger
pub fn init_console_only(console_level: LogLevel) -> Result<()> {
    init(LoggerConfig::console_only(console_level))
}

/// Install a file-only default logger writing under `path`
pub fn init_file_only(
    file_level: LogLevel,
    path: impl Into<PathBuf>,
    max_file_size: u64,
) -> Result<()> {
    init(LoggerConfig::file_only(file_level, path, max_file_size))
}

/// Install a default logger writing to the console and under `path`
pub fn init_both(
    console_level: LogLevel,
    file_level: LogLevel,
    path: impl Into<PathBuf>,
    max_file_size: u64,
) -> Result<()> {
    init(LoggerConfig::both(console_level, file_level, path, max_file_size))
}

/// Whether a default logger has been installed
pub fn is_initialized() -> bool {
    DEFAULT_LOGGER.get().is_some()
}

/// Get the default logger, if one has been installed
pub fn default_logger() -> Option<&'static Logger> {
    DEFAULT_LOGGER.get()
}

/// Log through the default logger, attributed to the caller
#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>) {
    log_at(level, SourceLocation::caller(), message);
}

/// Log through the default logger with an explicit source location
pub fn log_at(level: LogLevel, location: SourceLocation, message: impl Into<String>) {
    if let Some(logger) = DEFAULT_LOGGER.get() {
        logger.log_at(level, location, message);
    }
}

/// Close the default logger's file. Safe to call repeatedly or before [`init`].
///
/// # Errors
///
/// See [`Logger::close`].
pub fn close() -> Result<()> {
    match DEFAULT_LOGGER.get() {
        Some(logger) => logger.close(),
        None => Ok(()),
    }
}
