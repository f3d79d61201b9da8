//! Port for the logging contract.
//!
//! Every backend (text, capture, tee, cancellable, discard) implements
//! [`Logger`]. Components hold an `Arc<dyn Logger>` and never care which
//! variant sits behind it.

use std::fmt::Display;
use textlog_domain::{Level, Origin};

/// Logging interface shared by all backends.
///
/// Only [`log`](Logger::log), [`level`](Logger::level) and
/// [`set_level`](Logger::set_level) must be implemented. The per-level
/// convenience methods capture the call site and forward to `log`.
///
/// Values are borrowed as `&dyn Display` so a backend that filters the call
/// out never pays for rendering them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use textlog_application::{DiscardLogger, Logger};
///
/// let logger: Arc<dyn Logger> = Arc::new(DiscardLogger);
/// logger.info(&[&"Creating", &20, &"blocks"]);
/// logger.errorf("failed after {} attempts", &[&3]);
/// ```
pub trait Logger: Send + Sync {
    /// Log at `level` from `origin`.
    ///
    /// With `format == None` the values are joined by single spaces;
    /// otherwise the template's `{}` placeholders are filled in order.
    fn log(&self, level: Level, origin: &Origin, format: Option<&str>, args: &[&dyn Display]);

    /// Current minimum severity.
    fn level(&self) -> Level;

    /// Replace the minimum severity.
    fn set_level(&self, level: Level);

    #[track_caller]
    fn trace(&self, vals: &[&dyn Display]) {
        self.log(Level::Trace, &Origin::caller(), None, vals);
    }

    #[track_caller]
    fn debug(&self, vals: &[&dyn Display]) {
        self.log(Level::Debug, &Origin::caller(), None, vals);
    }

    #[track_caller]
    fn info(&self, vals: &[&dyn Display]) {
        self.log(Level::Info, &Origin::caller(), None, vals);
    }

    #[track_caller]
    fn error(&self, vals: &[&dyn Display]) {
        self.log(Level::Error, &Origin::caller(), None, vals);
    }

    #[track_caller]
    fn tracef(&self, format: &str, args: &[&dyn Display]) {
        self.log(Level::Trace, &Origin::caller(), Some(format), args);
    }

    #[track_caller]
    fn debugf(&self, format: &str, args: &[&dyn Display]) {
        self.log(Level::Debug, &Origin::caller(), Some(format), args);
    }

    #[track_caller]
    fn infof(&self, format: &str, args: &[&dyn Display]) {
        self.log(Level::Info, &Origin::caller(), Some(format), args);
    }

    #[track_caller]
    fn errorf(&self, format: &str, args: &[&dyn Display]) {
        self.log(Level::Error, &Origin::caller(), Some(format), args);
    }
}
