//! Infrastructure layer for textlog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the text encoder and decoder, the concrete
//! text logger, the process-wide default logger and configuration loading.

pub mod config;
pub mod logging;
pub mod text;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, FileLoggerConfig, FileOutputTarget};
pub use logging::{
    TextLogger, TimingGuard, build_capture_logger, build_text_logger, system, track_time,
};
pub use text::{CONTINUATION, DecodeError, LogReader, TextWriter, render_entry};
