//! Decoder error types

use std::io;
use thiserror::Error;

/// Errors produced while reading log text back into records.
///
/// After any of these the stream position is undefined; the reader stops
/// producing records.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformatted log file.  Cannot parse line: {line:?}")]
    Malformed { line: String },

    #[error("Starting in the middle of a log file: {line:?}")]
    OrphanContinuation { line: String },

    #[error("I/O error while reading log: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// The raw offending line, when the error is about a specific line.
    pub fn line(&self) -> Option<&str> {
        match self {
            DecodeError::Malformed { line } | DecodeError::OrphanContinuation { line } => {
                Some(line)
            }
            DecodeError::Io(_) => None,
        }
    }
}
