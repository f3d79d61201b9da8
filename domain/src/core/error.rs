//! Domain error types

use thiserror::Error;

/// Error returned when a severity name cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
    #[error("Unknown level: {0:?}")]
    Unknown(String),

    #[error("No such log level: {0}")]
    OutOfRange(i32),
}
