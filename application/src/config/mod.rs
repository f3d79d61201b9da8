//! Application-level configuration.
//!
//! - [`LoggerSettings`] — level, context and destination of the process logger

pub mod logger_settings;

pub use logger_settings::{Destination, LoggerSettings};
