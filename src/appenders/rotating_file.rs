//! Rotating file appender with size-based rotation
//!
//! The appender owns at most one open file. Files are created lazily under a
//! timestamped name derived from the base path (see [`file_naming`]), and a
//! fresh file is started whenever the next line would push the current one
//! past the configured size. Rotated files are left in place; nothing is
//! renamed, compressed or deleted.
//!
//! [`file_naming`]: crate::appenders::file_naming

use crate::appenders::file_naming::{ensure_dir, unique_path};
use crate::core::appender::Appender;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{LoggerError, Result};
use crate::core::log_entry::LogEntry;
use crate::core::metrics::LoggerMetrics;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The file currently being written
#[derive(Debug)]
pub struct OpenFile {
    file: File,
    path: PathBuf,
    /// Bytes successfully written since open, seeded from the on-disk length
    size: u64,
}

#[derive(Debug, Default)]
pub enum FileState {
    #[default]
    Unopened,
    Open(OpenFile),
}

/// File sink that rotates to a new timestamped file once a size limit is hit
///
/// # Examples
///
/// ```no_run
/// use rust_rotating_logger::appenders::RotatingFileAppender;
///
/// // Rotate once a file would exceed 10 MB
/// let mut appender = RotatingFileAppender::new("logs/app.log", 10 * 1024 * 1024);
/// appender.write_line("first line\n").unwrap();
/// println!("writing to {:?}", appender.current_path());
/// appender.close().unwrap();
/// ```
pub struct RotatingFileAppender {
    base_path: PathBuf,
    max_file_size: u64,
    clock: Arc<dyn Clock>,
    metrics: Arc<LoggerMetrics>,
    state: FileState,
}

impl RotatingFileAppender {
    /// Create an appender with no file open yet. `max_file_size == 0` disables rotation.
    pub fn new(base_path: impl Into<PathBuf>, max_file_size: u64) -> Self {
        Self {
            base_path: base_path.into(),
            max_file_size,
            clock: Arc::new(SystemClock),
            metrics: Arc::new(LoggerMetrics::new()),
            state: FileState::Unopened,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Open a fresh timestamped file and make it current
    ///
    /// The directory and the new name are resolved before anything is closed,
    /// so on error the previously open file (if any) stays current.
    ///
    /// # Errors
    ///
    /// Directory creation, name resolution, or opening the file failed.
    pub fn open_new(&mut self) -> Result<()> {
        ensure_dir(&self.base_path)?;
        let path = unique_path(&self.base_path, &self.clock.now())?;
        self.open_path(path)
    }

    /// Open `path` for appending and make it current
    ///
    /// The byte counter is seeded from the file's existing length.
    ///
    /// # Errors
    ///
    /// The file could not be opened; the current file is left untouched.
    pub fn open_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;

        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        // Dropping the previous handle closes it; close errors are not reported here
        let previous = mem::replace(&mut self.state, FileState::Open(OpenFile { file, path, size }));
        drop(previous);

        Ok(())
    }

    /// Whether writing `next_line_bytes` more would exceed the size limit
    pub fn should_rotate(&self, next_line_bytes: u64) -> bool {
        self.max_file_size > 0
            && self.current_size().saturating_add(next_line_bytes) > self.max_file_size
    }

    fn rotate(&mut self) -> Result<()> {
        self.open_new().map_err(|e| {
            LoggerError::file_rotation(self.base_path.display().to_string(), e.to_string())
        })?;
        self.metrics.record_rotation();
        Ok(())
    }

    /// Write one rendered line, opening or rotating the file first if needed
    ///
    /// On error the line has not been written and the byte count is unchanged.
    /// A failed rotation keeps the old file current; the next call tries again.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if !self.is_open() {
            if let Err(e) = self.open_new() {
                self.metrics.record_open_failure();
                return Err(e);
            }
        }

        let next_bytes = line.len() as u64;
        if self.should_rotate(next_bytes) {
            if let Err(e) = self.rotate() {
                self.metrics.record_open_failure();
                return Err(e);
            }
        }

        match &mut self.state {
            FileState::Open(open) => {
                open.file.write_all(line.as_bytes()).map_err(|e| {
                    LoggerError::file_appender(
                        open.path.display().to_string(),
                        format!("Failed to write log entry: {}", e),
                    )
                })?;
                open.size += next_bytes;
                Ok(())
            }
            FileState::Unopened => Err(LoggerError::file_appender(
                self.base_path.display().to_string(),
                "No log file is open",
            )),
        }
    }

    /// Release the current file, if any
    ///
    /// Safe to call repeatedly. A later write opens a new file.
    ///
    /// # Errors
    ///
    /// Syncing the file to disk before release failed. The handle is
    /// released either way.
    pub fn close(&mut self) -> Result<()> {
        match mem::take(&mut self.state) {
            FileState::Open(open) => open.file.sync_all().map_err(|e| {
                LoggerError::io_operation(
                    "closing log file",
                    format!("Failed to sync '{}'", open.path.display()),
                    e,
                )
            }),
            FileState::Unopened => Ok(()),
        }
    }

    /// Whether a file is currently open
    pub fn is_open(&self) -> bool {
        matches!(self.state, FileState::Open(_))
    }

    /// Bytes in the current file, 0 when no file is open
    pub fn current_size(&self) -> u64 {
        match &self.state {
            FileState::Open(open) => open.size,
            FileState::Unopened => 0,
        }
    }

    /// Resolved path of the current file
    pub fn current_path(&self) -> Option<&Path> {
        match &self.state {
            FileState::Open(open) => Some(&open.path),
            FileState::Unopened => None,
        }
    }

    /// Base path template the file names are derived from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Rotation threshold in bytes, 0 when rotation is off
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Appender for RotatingFileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.write_line(&entry.line())
    }

    fn flush(&mut self) -> Result<()> {
        if let FileState::Open(open) = &mut self.state {
            open.file.flush().map_err(|e| {
                LoggerError::file_appender(
                    open.path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RotatingFileAppender"
    }
}
