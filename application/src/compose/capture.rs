//! Bounded in-memory capture logger.
//!
//! Keeps up to `capacity` rendered messages. Once full, further messages are
//! dropped silently; older ones are never evicted.

use crate::ports::Logger;
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};
use textlog_domain::{Level, LogMessage, Origin, render_message};

/// Default number of messages a [`CaptureLogger`] keeps.
pub const DEFAULT_CAPTURE_CAPACITY: usize = 128;

/// Logger that records messages in memory, up to a cap.
///
/// Accepts every level; [`set_level`](Logger::set_level) is ignored.
#[derive(Debug)]
pub struct CaptureLogger {
    capacity: usize,
    messages: Mutex<Vec<LogMessage>>,
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPTURE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            messages: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the retained messages in arrival order and empties the buffer.
    pub fn drain(&self) -> Vec<LogMessage> {
        std::mem::replace(&mut *self.lock(), Vec::with_capacity(self.capacity))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, _origin: &Origin, format: Option<&str>, args: &[&dyn Display]) {
        let msg = render_message(format, args);
        let mut messages = self.lock();
        if messages.len() < self.capacity {
            messages.push(LogMessage { level, msg });
        }
    }

    fn level(&self) -> Level {
        Level::Trace
    }

    fn set_level(&self, _level: Level) {}
}

/// Re-emits captured messages into `logger` at their original levels.
#[track_caller]
pub fn replay(logger: &dyn Logger, messages: &[LogMessage]) {
    let origin = Origin::caller();
    for message in messages {
        logger.log(message.level, &origin, None, &[&message.msg]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_rendered_messages() {
        let logger = CaptureLogger::new();
        logger.info(&[&"Hi", &"there"]);
        logger.errorf("code {}", &[&42]);

        let msgs = logger.drain();
        assert_eq!(
            msgs,
            vec![
                LogMessage::new(Level::Info, "Hi there"),
                LogMessage::new(Level::Error, "code 42"),
            ]
        );
    }

    #[test]
    fn test_excess_messages_are_dropped_silently() {
        let logger = CaptureLogger::with_capacity(3);
        for i in 0..10 {
            logger.debugf("msg {}", &[&i]);
        }
        assert_eq!(logger.len(), 3);

        let msgs = logger.drain();
        let texts: Vec<_> = msgs.iter().map(|m| m.msg.as_str()).collect();
        assert_eq!(texts, vec!["msg 0", "msg 1", "msg 2"]);
    }

    #[test]
    fn test_drain_empties_buffer_and_makes_room_again() {
        let logger = CaptureLogger::with_capacity(1);
        logger.info(&[&"first"]);
        logger.info(&[&"dropped"]);
        assert_eq!(logger.drain().len(), 1);
        assert!(logger.is_empty());
        assert!(logger.drain().is_empty());

        logger.info(&[&"second"]);
        assert_eq!(logger.drain(), vec![LogMessage::new(Level::Info, "second")]);
    }

    #[test]
    fn test_level_is_always_trace() {
        let logger = CaptureLogger::new();
        logger.set_level(Level::Error);
        assert_eq!(logger.level(), Level::Trace);
        logger.trace(&[&"kept"]);
        assert_eq!(logger.len(), 1);
    }

    #[test]
    fn test_replay_preserves_levels_and_order() {
        let source = CaptureLogger::new();
        source.trace(&[&"a"]);
        source.error(&[&"b"]);
        source.infof("{}-{}", &[&"c", &1]);

        let target = CaptureLogger::new();
        replay(&target, &source.drain());

        assert_eq!(
            target.drain(),
            vec![
                LogMessage::new(Level::Trace, "a"),
                LogMessage::new(Level::Error, "b"),
                LogMessage::new(Level::Info, "c-1"),
            ]
        );
    }
}
