//! Output destinations selected at logger construction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where log lines are written. Fixed for the lifetime of a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    ConsoleOnly,
    FileOnly,
    Both,
}

impl OutputMode {
    #[inline]
    pub fn writes_console(self) -> bool {
        matches!(self, OutputMode::ConsoleOnly | OutputMode::Both)
    }

    #[inline]
    pub fn writes_file(self) -> bool {
        matches!(self, OutputMode::FileOnly | OutputMode::Both)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            OutputMode::ConsoleOnly => "console",
            OutputMode::FileOnly => "file",
            OutputMode::Both => "both",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "console_only" => Ok(OutputMode::ConsoleOnly),
            "file" | "file_only" => Ok(OutputMode::FileOnly),
            "both" => Ok(OutputMode::Both),
            _ => Err(format!("Invalid output mode: '{}'", s)),
        }
    }
}
