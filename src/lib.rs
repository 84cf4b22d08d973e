//! # Rust Rotating Logger
//!
//! A leveled logger that writes to the console, to a size-rotated file, or
//! both, and stays consistent when many threads log at once.
//!
//! ## Features
//!
//! - **Per-sink levels**: console and file each have their own minimum level
//! - **Size-based rotation**: a new timestamped file is started before a line
//!   would push the current one past its limit; old files are kept
//! - **Collision-free names**: `logs/app.log` becomes
//!   `logs/app_31.01.2026_23-10-15.log`, then `..._01.log` within the same second
//! - **Never fails the caller**: write errors drop the line and are counted
//!
//! ```no_run
//! use rust_rotating_logger::prelude::*;
//!
//! let logger = Logger::new(LoggerConfig::both(
//!     LogLevel::Info,
//!     LogLevel::Debug,
//!     "logs/app.log",
//!     10 * 1024 * 1024,
//! ))?;
//!
//! logger.debug("file only");
//! logger.info("console and file");
//! logger.close()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, RotatingFileAppender};
    pub use crate::core::{
        Appender, Clock, FixedClock, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, OutputMode, Result, SourceLocation, SystemClock,
    };
}

pub use crate::appenders::{ConsoleAppender, RotatingFileAppender};
pub use crate::core::{
    Appender, Clock, FixedClock, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputMode, Result, SourceLocation, SystemClock,
};
