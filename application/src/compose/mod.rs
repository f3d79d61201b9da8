//! Composition layer — loggers that wrap other loggers.
//!
//! - [`TeeLogger`] — fan-out to several delegates
//! - [`CancellableLogger`] — one-way swap to a discarding delegate
//! - [`DiscardLogger`] — drops everything
//! - [`CaptureLogger`] — bounded in-memory buffer with drain
//!
//! Wrappers hold delegates by `Arc`; they never copy logger state.

mod cancellable;
mod capture;
mod discard;
mod tee;

pub use cancellable::CancellableLogger;
pub use capture::{CaptureLogger, DEFAULT_CAPTURE_CAPACITY, replay};
pub use discard::DiscardLogger;
pub use tee::TeeLogger;

#[cfg(test)]
pub(crate) mod tests_support {
    use crate::ports::Logger;
    use std::fmt::Display;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use textlog_domain::{Level, Origin};

    /// Logger that only tracks its threshold.
    pub struct LevelOnly(AtomicI32);

    impl LevelOnly {
        pub fn new(level: Level) -> Self {
            Self(AtomicI32::new(level.as_i32()))
        }
    }

    impl Logger for LevelOnly {
        fn log(&self, _: Level, _: &Origin, _: Option<&str>, _: &[&dyn Display]) {}

        fn level(&self) -> Level {
            Level::from_i32(self.0.load(Ordering::Relaxed)).unwrap_or(Level::Error)
        }

        fn set_level(&self, level: Level) {
            self.0.store(level.as_i32(), Ordering::Relaxed);
        }
    }

    /// Runs `f(i)` for `i in 0..n` on `n` threads released at the same instant.
    pub fn execute_with_maximum_contention<F>(n: usize, f: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        let barrier = Arc::new(Barrier::new(n));
        thread::scope(|s| {
            for i in 0..n {
                let barrier = Arc::clone(&barrier);
                let f = &f;
                s.spawn(move || {
                    barrier.wait();
                    f(i);
                });
            }
        });
    }
}
