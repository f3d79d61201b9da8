//! Domain layer for textlog
//!
//! This crate contains the plain data of the logging façade: severity
//! levels, log entries, decoded records and message rendering. It has no
//! dependencies on I/O or on any concrete logger.
//!
//! # Wire format
//!
//! ```text
//! <LevelChar><MMDD HH:MM:SS.mmmZONE> <file>[:<line>] (<context>): <message>
//! ```
//!
//! Physical lines after the first of a multi-line entry start with
//! [`CONTINUATION`].

pub mod core;

/// Prefix that marks a physical line as part of the previous logical entry.
pub const CONTINUATION: &str = "    ";

// Re-export commonly used types
pub use core::{
    entry::{Entry, Origin},
    error::LevelParseError,
    level::Level,
    record::{LogMessage, LogRecord},
    template::render_message,
};
