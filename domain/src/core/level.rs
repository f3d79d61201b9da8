//! Severity levels.
//!
//! [`Level`] is strictly ordered `Trace < Debug < Info < Error` and backed by
//! a small integer so thresholds can live in an atomic word.

use super::error::LevelParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered log severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Level {
    /// Verbose tracing output
    #[default]
    Trace = 1,
    /// Debugging information
    Debug = 2,
    /// General information
    Info = 3,
    /// Errors
    Error = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [Level::Trace, Level::Debug, Level::Info, Level::Error];

    /// Numeric value of this level.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Converts a numeric value back into a level.
    pub fn from_i32(value: i32) -> Result<Self, LevelParseError> {
        match value {
            1 => Ok(Level::Trace),
            2 => Ok(Level::Debug),
            3 => Ok(Level::Info),
            4 => Ok(Level::Error),
            other => Err(LevelParseError::OutOfRange(other)),
        }
    }

    /// Single character used as the first byte of a wire-format line.
    pub fn as_char(self) -> char {
        match self {
            Level::Trace => 'T',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Error => 'E',
        }
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(Level::Trace),
            'D' => Some(Level::Debug),
            'I' => Some(Level::Info),
            'E' => Some(Level::Error),
            _ => None,
        }
    }

    /// Long lowercase name (`trace`, `debug`, `info`, `error`).
    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }

    /// Parses a short or long level name, ignoring case.
    pub fn parse(s: &str) -> Result<Self, LevelParseError> {
        match s.to_lowercase().as_str() {
            "t" | "trace" => Ok(Level::Trace),
            "d" | "debug" => Ok(Level::Debug),
            "i" | "info" => Ok(Level::Info),
            "e" | "error" => Ok(Level::Error),
            _ => Err(LevelParseError::Unknown(s.to_string())),
        }
    }

    /// Like [`parse`](Self::parse), but an unknown name is treated as a
    /// fatal configuration mistake.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message when `s` is not a level name.
    pub fn parse_or_die(s: &str) -> Self {
        match Self::parse(s) {
            Ok(level) => level,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
