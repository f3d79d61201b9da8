//! Core domain concepts shared across all layers.
//!
//! - [`level::Level`] — ordered severity
//! - [`entry::Entry`] — one log event ready for encoding
//! - [`record::LogRecord`] — one entry decoded from text
//! - [`template`] — message body rendering

pub mod entry;
pub mod error;
pub mod level;
pub mod record;
pub mod template;
