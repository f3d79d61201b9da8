//! Records produced by reading back encoded log text.

use super::level::Level;
use serde::{Deserialize, Serialize};

/// One logical entry reassembled from log text.
///
/// The timestamp and origin are kept as the text that appeared in the
/// header; only level, context and message are meant to round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// The matched header, e.g. `I0101 00:00:00.000Z main.rs:3 (ctx): `.
    pub header: String,
    pub level: Level,
    pub timestamp: String,
    pub file: String,
    pub line: Option<u32>,
    pub context: String,
    /// Message with continuation prefixes removed and trailing CR/LF trimmed.
    pub message: String,
}

/// A message held by an in-memory capture logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: Level,
    pub msg: String,
}

impl LogMessage {
    pub fn new(level: Level, msg: impl Into<String>) -> Self {
        Self {
            level,
            msg: msg.into(),
        }
    }
}
