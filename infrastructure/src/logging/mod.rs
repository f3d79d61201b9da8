//! Concrete loggers and process-wide logging helpers.
//!
//! - [`TextLogger`] — level-filtered text backend
//! - [`system`] — the replaceable process-wide default logger, plus the
//!   fatal path and call-stack capture
//! - [`track_time`] — elapsed-time logging guard

mod factory;
pub mod system;
mod text_logger;
mod timing;

pub use factory::{build_capture_logger, build_text_logger};
pub use text_logger::TextLogger;
pub use timing::{TimingGuard, track_time};
