//! Application layer for textlog
//!
//! This crate contains the logging ports, the composition layer that wraps
//! loggers in other loggers, and record queries for log tooling.
//! It depends only on the domain layer.

pub mod compose;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use compose::{
    CancellableLogger, CaptureLogger, DEFAULT_CAPTURE_CAPACITY, DiscardLogger, TeeLogger, replay,
};
pub use config::{Destination, LoggerSettings};
pub use ports::{EntryWriter, Logger};
pub use use_cases::{FilteredRecords, RecordQuery};
