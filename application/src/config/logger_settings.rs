//! Resolved logger settings.
//!
//! [`LoggerSettings`] is what a backend factory needs to build the
//! process logger. It is produced from the raw file configuration by the
//! infrastructure layer.

use crate::compose::DEFAULT_CAPTURE_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use textlog_domain::Level;

/// Where a text logger writes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Destination {
    #[default]
    Stderr,
    Stdout,
    /// Append to a file, creating it if needed.
    File(PathBuf),
}

/// Settings for building the process logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    pub level: Level,
    pub context: String,
    pub destination: Destination,
    /// Capacity of capture loggers built from these settings.
    pub capture_capacity: usize,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            context: String::new(),
            destination: Destination::default(),
            capture_capacity: DEFAULT_CAPTURE_CAPACITY,
        }
    }
}

impl LoggerSettings {
    // ==================== Builder Methods ====================

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_capture_capacity(mut self, capacity: usize) -> Self {
        self.capture_capacity = capacity;
        self
    }
}
