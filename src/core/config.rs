//! Logger configuration
//!
//! A [`LoggerConfig`] is captured once when a [`Logger`](crate::core::Logger)
//! is built and never changes afterwards. It can be assembled in code or
//! loaded from a JSON document:
//!
//! ```
//! use rust_rotating_logger::core::{LogLevel, LoggerConfig, OutputMode};
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "output_mode": "both",
//!     "console_level": "info",
//!     "file_level": "debug",
//!     "file_path": "logs/app.log",
//!     "max_file_size": 1048576
//! }"#).unwrap();
//!
//! assert_eq!(config.output_mode, OutputMode::Both);
//! assert_eq!(config.file_level, LogLevel::Debug);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::output_mode::OutputMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub output_mode: OutputMode,
    /// Minimum level written to the console
    pub console_level: LogLevel,
    /// Minimum level written to the file
    pub file_level: LogLevel,
    /// Base path template such as `logs/app.log`; actual files get a timestamp suffix
    pub file_path: Option<PathBuf>,
    /// Rotation threshold in bytes, 0 disables rotation
    pub max_file_size: u64,
    /// Colour the level token on the console
    pub use_colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::ConsoleOnly,
            console_level: LogLevel::Info,
            file_level: LogLevel::Debug,
            file_path: None,
            max_file_size: 0,
            use_colors: false,
        }
    }
}

impl LoggerConfig {
    pub fn new(
        output_mode: OutputMode,
        console_level: LogLevel,
        file_level: LogLevel,
        file_path: Option<PathBuf>,
        max_file_size: u64,
    ) -> Self {
        Self {
            output_mode,
            console_level,
            file_level,
            file_path,
            max_file_size,
            use_colors: false,
        }
    }

    pub fn console_only(console_level: LogLevel) -> Self {
        Self::new(OutputMode::ConsoleOnly, console_level, LogLevel::Debug, None, 0)
    }

    pub fn file_only(file_level: LogLevel, path: impl Into<PathBuf>, max_file_size: u64) -> Self {
        Self::new(
            OutputMode::FileOnly,
            LogLevel::Debug,
            file_level,
            Some(path.into()),
            max_file_size,
        )
    }

    pub fn both(
        console_level: LogLevel,
        file_level: LogLevel,
        path: impl Into<PathBuf>,
        max_file_size: u64,
    ) -> Self {
        Self::new(
            OutputMode::Both,
            console_level,
            file_level,
            Some(path.into()),
            max_file_size,
        )
    }

    /// Parse a configuration from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&text)
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_console_level(mut self, level: LogLevel) -> Self {
        self.console_level = level;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file_level(mut self, level: LogLevel) -> Self {
        self.file_level = level;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    /// Lowest level that reaches at least one configured sink
    pub fn min_enabled_level(&self) -> LogLevel {
        match self.output_mode {
            OutputMode::ConsoleOnly => self.console_level,
            OutputMode::FileOnly => self.file_level,
            OutputMode::Both => self.console_level.min(self.file_level),
        }
    }

    /// Check that file-backed modes have a usable base path
    pub fn validate(&self) -> Result<()> {
        if !self.output_mode.writes_file() {
            return Ok(());
        }

        let path = self.file_path.as_deref().ok_or_else(|| {
            LoggerError::config(
                "LoggerConfig",
                format!("output mode '{}' requires a file path", self.output_mode),
            )
        })?;

        if path.file_name().is_none() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("file path '{}' has no file name", path.display()),
            ));
        }

        Ok(())
    }
}
