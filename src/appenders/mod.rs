//! Appender implementations

pub mod console;
pub mod file_naming;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use rotating_file::{FileState, OpenFile, RotatingFileAppender};

// Re-export trait for convenience
pub use crate::core::Appender;
