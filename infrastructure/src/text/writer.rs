//! Text encoder.
//!
//! Renders an [`Entry`] as
//!
//! ```text
//! LMMDD HH:MM:SS.mmmZ file.rs:## (context): msg...
//! ```
//!
//! where `L` is the level character, the timestamp is fixed width and `Z`
//! stands for UTC (other zones render as `+hhmm`). File, line and context
//! are floating-width. Lines after the first of a multi-line context or
//! message are prefixed with [`CONTINUATION`](super::CONTINUATION).

use super::continuation::ContinuationWriter;
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use textlog_application::EntryWriter;
use textlog_domain::core::template::write_message;
use textlog_domain::{Entry, Origin};

/// Encoder that writes text blocks to a shared sink.
///
/// Each block is built in a private buffer first; the sink lock is only
/// held for the final byte transfer, so concurrent writers never interleave
/// and never wait on each other's formatting.
pub struct TextWriter<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> TextWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Run `f` with exclusive access to the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> EntryWriter for TextWriter<W> {
    fn write(&self, entry: &Entry) -> io::Result<()> {
        let block = render_entry(entry);

        let mut sink = self.lock();
        sink.write_all(block.as_bytes())?;
        sink.flush()
    }
}

/// Renders one newline-terminated block for `entry`.
pub fn render_entry(entry: &Entry) -> String {
    let mut buf = String::with_capacity(64 + entry.context.len());
    // Arguments are already rendered, so writing into the buffer cannot fail.
    let _ = write_entry(&mut ContinuationWriter::new(&mut buf), entry);
    buf
}

fn write_entry<W: fmt::Write>(w: &mut W, entry: &Entry) -> fmt::Result {
    write!(
        w,
        "{}{} {} ({}): ",
        entry.level.as_char(),
        format_timestamp(&entry.time),
        format_origin(&entry.origin),
        entry.context
    )?;
    write_message(w, entry.format.as_deref(), &entry.args)?;
    w.write_char('\n')
}

/// `MMDD HH:MM:SS.mmm` followed by `Z` for UTC or `+hhmm`/`-hhmm`.
pub fn format_timestamp(time: &DateTime<FixedOffset>) -> String {
    let mut out = time.format("%m%d %H:%M:%S%.3f").to_string();
    if time.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&time.format("%z").to_string());
    }
    out
}

/// `basename[:line]`, or `???` when the file is unknown.
pub fn format_origin(origin: &Origin) -> String {
    let file = match origin.file.as_deref() {
        None | Some("") => "???".to_string(),
        Some(path) => Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string()),
    };
    match origin.line {
        Some(line) => format!("{file}:{line}"),
        None => file,
    }
}
