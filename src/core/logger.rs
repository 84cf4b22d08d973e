//! Main logger implementation
//!
//! A [`Logger`] routes each message to the console, to a rotating file, or
//! both, according to an immutable [`LoggerConfig`]. All sink state lives
//! behind one mutex, so size accounting, the open file handle and rotation
//! decisions are updated by exactly one caller at a time. Console output is
//! written under the same lock, which keeps lines from concurrent callers
//! whole and in the same order on every sink.
//!
//! Logging never fails from the caller's point of view: a line a sink cannot
//! write is dropped for that sink and counted in [`LoggerMetrics`].

use super::{
    appender::Appender,
    clock::{Clock, SystemClock},
    config::LoggerConfig,
    error::Result,
    log_entry::{LogEntry, SourceLocation},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_mode::OutputMode,
};
use crate::appenders::{ConsoleAppender, RotatingFileAppender};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

struct Sinks {
    console: Option<ConsoleAppender>,
    file: Option<RotatingFileAppender>,
}

pub struct Logger {
    config: LoggerConfig,
    clock: Arc<dyn Clock>,
    sinks: Mutex<Sinks>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger from `config`
    ///
    /// For file-backed modes the first timestamped file is opened here.
    ///
    /// # Errors
    ///
    /// The configuration is invalid, or the log directory or first file
    /// could not be created.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`Logger::new`], reading time from `clock`
    pub fn with_clock(config: LoggerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let metrics = Arc::new(LoggerMetrics::new());

        let console = config
            .output_mode
            .writes_console()
            .then(|| ConsoleAppender::with_colors(config.use_colors));

        // validate() guarantees a path whenever the mode writes a file
        let file = match (&config.file_path, config.output_mode.writes_file()) {
            (Some(path), true) => {
                let mut appender = RotatingFileAppender::new(path.clone(), config.max_file_size)
                    .with_clock(Arc::clone(&clock))
                    .with_metrics(Arc::clone(&metrics));
                appender.open_new()?;
                Some(appender)
            }
            _ => None,
        };

        Ok(Self {
            config,
            clock,
            sinks: Mutex::new(Sinks { console, file }),
            metrics,
        })
    }

    /// Whether a message at `level` reaches at least one sink
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.config.min_enabled_level())
    }

    fn console_accepts(&self, level: LogLevel) -> bool {
        self.config.output_mode.writes_console() && level.passes(self.config.console_level)
    }

    fn file_accepts(&self, level: LogLevel) -> bool {
        self.config.output_mode.writes_file() && level.passes(self.config.file_level)
    }

    /// Log `message` at `level`, attributed to the caller's source location
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_at(level, SourceLocation::caller(), message);
    }

    /// Log `message` at `level` with an explicit source location
    pub fn log_at(&self, level: LogLevel, location: SourceLocation, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut sinks = self.sinks.lock();
        let entry = LogEntry::new(level, message.into(), self.clock.now(), location);
        self.route(&mut sinks, &entry);
    }

    fn route(&self, sinks: &mut Sinks, entry: &LogEntry) {
        if self.console_accepts(entry.level) {
            if let Some(console) = sinks.console.as_mut() {
                match console.append(entry) {
                    Ok(()) => self.metrics.record_console_line(),
                    Err(_) => self.metrics.record_dropped(),
                };
            }
        }

        if self.file_accepts(entry.level) {
            if let Some(file) = sinks.file.as_mut() {
                match file.append(entry) {
                    Ok(()) => self.metrics.record_file_line(),
                    Err(_) => self.metrics.record_dropped(),
                };
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Release the log file, if one is open
    ///
    /// Safe to call any number of times. Logging after `close` opens a new
    /// timestamped file.
    ///
    /// # Errors
    ///
    /// The file could not be synced before release.
    pub fn close(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        match sinks.file.as_mut() {
            Some(file) => file.close(),
            None => Ok(()),
        }
    }

    /// Flush both sinks
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        if let Some(console) = sinks.console.as_mut() {
            console.flush()?;
        }
        if let Some(file) = sinks.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Path of the file currently being written
    pub fn current_file_path(&self) -> Option<PathBuf> {
        let sinks = self.sinks.lock();
        sinks
            .file
            .as_ref()
            .and_then(|file| file.current_path())
            .map(|path| path.to_path_buf())
    }

    /// Bytes written to the current file, 0 when none is open
    pub fn current_file_size(&self) -> u64 {
        let sinks = self.sinks.lock();
        sinks.file.as_ref().map_or(0, |file| file.current_size())
    }

    /// Get the configuration this logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get the configured output mode
    pub fn output_mode(&self) -> OutputMode {
        self.config.output_mode
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_rotating_logger::prelude::*;
    ///
    /// let logger = Logger::new(LoggerConfig::console_only(LogLevel::Warn)).unwrap();
    /// logger.info("filtered out");
    /// logger.warn("shown");
    ///
    /// assert_eq!(logger.metrics().console_lines_written(), 1);
    /// assert_eq!(logger.metrics().dropped_count(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(file) = self.sinks.get_mut().file.as_mut() {
            // Best effort - nobody is left to report the error to
            let _ = file.close();
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_rotating_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .output_mode(OutputMode::Both)
///     .console_level(LogLevel::Info)
///     .file_level(LogLevel::Debug)
///     .file_path("logs/app.log")
///     .max_file_size(10 * 1024 * 1024)
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            clock: None,
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_level(mut self, level: LogLevel) -> Self {
        self.config.console_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_level(mut self, level: LogLevel) -> Self {
        self.config.file_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    /// Rotation threshold in bytes; 0 keeps a single growing file
    #[must_use = "builder methods return a new value"]
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.config.use_colors = enabled;
        self
    }

    /// Read time from `clock` instead of the system clock
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// See [`Logger::new`].
    pub fn build(self) -> Result<Logger> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Logger::with_clock(self.config, clock)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
