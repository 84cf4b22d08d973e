//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The formatted
//! message is only built when the level reaches at least one sink, and the
//! source location recorded is the macro's call site.
//!
//! # Examples
//!
//! ```
//! use rust_rotating_logger::prelude::*;
//! use rust_rotating_logger::info;
//!
//! let logger = Logger::new(LoggerConfig::console_only(LogLevel::Info)).unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```
//!
//! The `log_*!` family writes through the process-wide default logger
//! installed by [`global::init`](crate::global::init) and does nothing
//! before it.

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_rotating_logger::prelude::*;
/// # let logger = Logger::new(LoggerConfig::console_only(LogLevel::Info)).unwrap();
/// use rust_rotating_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log_at(
                level,
                $crate::core::SourceLocation::new(file!(), line!()),
                format!($($arg)+),
            )
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_rotating_logger::prelude::*;
/// # let logger = Logger::new(LoggerConfig::console_only(LogLevel::Debug)).unwrap();
/// use rust_rotating_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log through the default logger at an explicit level.
#[macro_export]
macro_rules! log_default {
    ($level:expr, $($arg:tt)+) => {{
        if let Some(logger) = $crate::global::default_logger() {
            $crate::log!(logger, $level, $($arg)+)
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log_default!($crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log_default!($crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::log_default!($crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log_default!($crate::LogLevel::Error, $($arg)+)
    };
}
