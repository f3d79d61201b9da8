//! Port for encoders that turn an [`Entry`] into bytes on a sink.

use std::io;
use textlog_domain::Entry;

/// Formats and writes log entries.
///
/// Implementations must be safe to call from many threads at once and
/// must never interleave the output of two entries.
pub trait EntryWriter: Send + Sync {
    /// Append exactly one newline-terminated block for `entry`.
    fn write(&self, entry: &Entry) -> io::Result<()>;
}
