//! One-shot cancellable logger.
//!
//! Wraps a delegate behind a read/write lock. Log and level calls share the
//! read lock and run concurrently; [`CancellableLogger::cancel`] takes the
//! write lock and swaps the delegate for a [`DiscardLogger`]. A call racing
//! with cancellation therefore runs entirely against one delegate or the
//! other, and nothing reaches the original delegate once `cancel` returns.

use super::discard::DiscardLogger;
use crate::ports::Logger;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use textlog_domain::{Level, Origin};
use tracing::debug;

/// A logger that can be cancelled. Once cancelled, all subsequent calls are
/// dropped. Cancellation is permanent and idempotent.
pub struct CancellableLogger {
    delegate: RwLock<Arc<dyn Logger>>,
    cancelled: AtomicBool,
}

impl CancellableLogger {
    pub fn new(delegate: Arc<dyn Logger>) -> Self {
        Self {
            delegate: RwLock::new(delegate),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Permanently replace the delegate with a discarding logger.
    pub fn cancel(&self) {
        let mut delegate = self
            .delegate
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            *delegate = Arc::new(DiscardLogger);
            debug!("logger cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn delegate(&self) -> RwLockReadGuard<'_, Arc<dyn Logger>> {
        self.delegate.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for CancellableLogger {
    fn log(&self, level: Level, origin: &Origin, format: Option<&str>, args: &[&dyn Display]) {
        self.delegate().log(level, origin, format, args);
    }

    fn level(&self) -> Level {
        self.delegate().level()
    }

    fn set_level(&self, level: Level) {
        self.delegate().set_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::CaptureLogger;
    use crate::compose::tests_support::{LevelOnly, execute_with_maximum_contention};
    use textlog_domain::LogMessage;

    #[test]
    fn test_forwards_until_cancelled() {
        let inner = Arc::new(CaptureLogger::new());
        let logger = CancellableLogger::new(inner.clone());

        logger.info(&[&"before"]);
        logger.cancel();
        logger.info(&[&"after"]);

        assert!(logger.is_cancelled());
        assert_eq!(inner.drain(), vec![LogMessage::new(Level::Info, "before")]);
    }

    #[test]
    fn test_cancelled_logger_reports_error_level() {
        let logger = CancellableLogger::new(Arc::new(LevelOnly::new(Level::Debug)));
        assert_eq!(logger.level(), Level::Debug);
        logger.set_level(Level::Info);
        assert_eq!(logger.level(), Level::Info);

        logger.cancel();
        logger.set_level(Level::Trace);
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_second_cancel_is_a_no_op() {
        let logger = CancellableLogger::new(Arc::new(CaptureLogger::new()));
        logger.cancel();
        logger.cancel();
        assert!(logger.is_cancelled());
    }

    #[test]
    fn test_concurrent_writes_racing_with_cancel() {
        const N: usize = 64;
        let inner = Arc::new(CaptureLogger::with_capacity(N));
        let logger = Arc::new(CancellableLogger::new(inner.clone()));

        // The last task cancels while the others write.
        execute_with_maximum_contention(N + 1, |i| {
            if i == N {
                logger.cancel();
            } else {
                logger.infof("writer {} says {}", &[&i, &"hello"]);
            }
        });

        // Nothing gets through after cancellation.
        logger.info(&[&"late"]);

        let msgs = inner.drain();
        assert!(msgs.len() <= N);
        for msg in &msgs {
            let (_, rest) = msg.msg.split_once("writer ").unwrap();
            let (index, tail) = rest.split_once(' ').unwrap();
            assert!(index.parse::<usize>().unwrap() < N);
            assert_eq!(tail, "says hello");
        }
        assert!(msgs.iter().all(|m| m.msg != "late"));
    }
}
