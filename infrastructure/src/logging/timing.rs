//! Elapsed-time logging.

use std::sync::Arc;
use std::time::{Duration, Instant};
use textlog_application::Logger;
use textlog_domain::{Level, Origin};

const TRACK_TIME_FORMAT: &str = "{} spent performing operation: {}";

/// Guard returned by [`track_time`]; logs the elapsed time when dropped.
#[must_use = "the elapsed time is logged when the guard is dropped"]
pub struct TimingGuard {
    logger: Arc<dyn Logger>,
    level: Level,
    origin: Origin,
    label: String,
    start: Instant,
}

impl TimingGuard {
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let elapsed = format!("{:?}", self.start.elapsed());
        self.logger.log(
            self.level,
            &self.origin,
            Some(TRACK_TIME_FORMAT),
            &[&elapsed, &self.label],
        );
    }
}

/// Starts timing an operation. Put it at the top of a scope:
///
/// ```ignore
/// let _timer = track_time(logger.clone(), Level::Debug, "loading project");
/// ```
#[track_caller]
pub fn track_time(logger: Arc<dyn Logger>, level: Level, label: impl Into<String>) -> TimingGuard {
    TimingGuard {
        logger,
        level,
        origin: Origin::caller(),
        label: label.into(),
        start: Instant::now(),
    }
}
