//! Logger metrics for observability
//!
//! The write path never reports failures to its caller, so these counters
//! are the only place dropped lines and failed rotations become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger has done so far
///
/// # Example
///
/// ```
/// use rust_rotating_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_file_line();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.file_lines_written(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines written to the current or a previous log file
    file_lines_written: AtomicU64,

    /// Lines written to stdout or stderr
    console_lines_written: AtomicU64,

    /// Lines a sink accepted by level but failed to write
    dropped_count: AtomicU64,

    /// Successful size-triggered switches to a new file
    rotations: AtomicU64,

    /// Failed attempts to open a first or rotated file
    open_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            file_lines_written: AtomicU64::new(0),
            console_lines_written: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            open_failures: AtomicU64::new(0),
        }
    }

    /// Get the number of lines written to log files
    #[inline]
    pub fn file_lines_written(&self) -> u64 {
        self.file_lines_written.load(Ordering::Relaxed)
    }

    /// Get the number of lines written to the console
    #[inline]
    pub fn console_lines_written(&self) -> u64 {
        self.console_lines_written.load(Ordering::Relaxed)
    }

    /// Get the number of dropped lines
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Get the number of completed rotations
    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    /// Get the number of failed file opens
    #[inline]
    pub fn open_failures(&self) -> u64 {
        self.open_failures.load(Ordering::Relaxed)
    }

    /// Record a line written to a file, returning the previous count
    #[inline]
    pub fn record_file_line(&self) -> u64 {
        self.file_lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a line written to the console, returning the previous count
    #[inline]
    pub fn record_console_line(&self) -> u64 {
        self.console_lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped line, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a completed rotation, returning the previous count
    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed file open, returning the previous count
    #[inline]
    pub fn record_open_failure(&self) -> u64 {
        self.open_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Total lines handed to any sink, written or dropped
    pub fn total_attempted(&self) -> u64 {
        self.file_lines_written() + self.console_lines_written() + self.dropped_count()
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been attempted.
    pub fn drop_rate(&self) -> f64 {
        let total = self.total_attempted();
        if total == 0 {
            return 0.0;
        }
        (self.dropped_count() as f64 / total as f64) * 100.0
    }
}
