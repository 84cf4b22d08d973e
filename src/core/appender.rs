//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A sink the logger routes rendered entries to.
///
/// Appenders are driven while the logger's lock is held, so they see calls
/// strictly one at a time.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
