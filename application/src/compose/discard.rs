//! Logger that drops everything.

use crate::ports::Logger;
use std::fmt::Display;
use textlog_domain::{Level, Origin};

/// A logger that discards all messages.
///
/// Reports [`Level::Error`] as its threshold, the highest severity, since
/// nothing it receives is ever kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLogger;

impl Logger for DiscardLogger {
    #[inline]
    fn log(&self, _level: Level, _origin: &Origin, _format: Option<&str>, _args: &[&dyn Display]) {}

    fn level(&self) -> Level {
        Level::Error
    }

    fn set_level(&self, _level: Level) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiscardLogger>();
    }

    #[test]
    fn test_discard_logger_reports_error_level() {
        let logger = DiscardLogger;
        logger.set_level(Level::Trace);
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_discard_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(DiscardLogger);
        logger.trace(&[&"trace message"]);
        logger.infof("{} message", &[&"info"]);
        logger.error(&[&"error message"]);
    }
}
