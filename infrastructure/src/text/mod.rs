//! Text encoding and decoding of log entries.
//!
//! - [`TextWriter`] — `Entry` → one newline-terminated text block
//! - [`LogReader`] — text stream → `LogRecord`s, re-joining continuation lines

mod continuation;
mod error;
mod reader;
mod writer;

pub use continuation::ContinuationWriter;
pub use textlog_domain::CONTINUATION;
pub use error::DecodeError;
pub use reader::LogReader;
pub use writer::{TextWriter, format_origin, format_timestamp, render_entry};
