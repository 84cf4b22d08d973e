//! Log entry structure and line rendering

use super::log_level::LogLevel;
use chrono::NaiveDateTime;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Line timestamp layout: `2026/01/31 23:10:15`
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Call site of a logging invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of whoever called the `#[track_caller]` chain ending here
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Base name of the source file, without its directories
    pub fn file_name(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub location: SourceLocation,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: String,
        timestamp: NaiveDateTime,
        location: SourceLocation,
    ) -> Self {
        Self {
            level,
            message,
            timestamp,
            location,
        }
    }

    /// Render the newline-terminated line shared by every sink
    pub fn line(&self) -> String {
        format!(
            "{} {}: {} - {}\n",
            self.timestamp.format(LINE_TIMESTAMP_FORMAT),
            self.level.to_str(),
            self.location,
            self.message
        )
    }
}
