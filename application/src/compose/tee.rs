//! Fan-out logger — forwards every call to multiple delegates.

use crate::ports::Logger;
use std::fmt::Display;
use std::sync::Arc;
use textlog_domain::{Level, Origin};

/// A logger that delegates to several inner loggers in order.
///
/// Each delegate applies its own level filter; a delegate that fails to
/// write does not stop the others from receiving the call.
///
/// ```text
///                      TeeLogger
///                          |
///        +-----------------+-----------------+
///        |                                   |
///   TextLogger (stderr)              CaptureLogger
/// ```
#[derive(Clone)]
pub struct TeeLogger {
    delegates: Vec<Arc<dyn Logger>>,
}

impl TeeLogger {
    pub fn new(delegates: Vec<Arc<dyn Logger>>) -> Self {
        Self { delegates }
    }

    pub fn delegates(&self) -> &[Arc<dyn Logger>] {
        &self.delegates
    }
}

impl Logger for TeeLogger {
    fn log(&self, level: Level, origin: &Origin, format: Option<&str>, args: &[&dyn Display]) {
        for d in &self.delegates {
            d.log(level, origin, format, args);
        }
    }

    /// The most permissive delegate threshold, or [`Level::Error`] when
    /// there are no delegates.
    fn level(&self) -> Level {
        self.delegates
            .iter()
            .map(|d| d.level())
            .min()
            .unwrap_or(Level::Error)
    }

    fn set_level(&self, level: Level) {
        for d in &self.delegates {
            d.set_level(level);
        }
    }
}
