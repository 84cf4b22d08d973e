//! Core logger types and traits

pub mod appender;
pub mod clock;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_mode;

pub use appender::Appender;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_entry::{LogEntry, SourceLocation};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_mode::OutputMode;
