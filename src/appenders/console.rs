//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

pub struct ConsoleAppender {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour the level token. Has no effect without the `console` feature.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Error lines go to stderr, everything else to stdout
    pub fn is_stderr(level: LogLevel) -> bool {
        level == LogLevel::Error
    }

    fn render(&self, entry: &LogEntry) -> String {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                let line = entry.line();
                let token = entry.level.to_str();
                let colored = token.color(entry.level.color_code()).to_string();
                return line.replacen(&format!(" {}: ", token), &format!(" {}: ", colored), 1);
            }
        }

        entry.line()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.render(entry);

        if Self::is_stderr(entry.level) {
            io::stderr().lock().write_all(line.as_bytes())?;
        } else {
            io::stdout().lock().write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
