//! Text logger — the concrete, level-filtered backend.
//!
//! Each call below the threshold returns before the clock is read or any
//! argument is rendered. Calls that pass become an [`Entry`] and go to an
//! [`EntryWriter`], normally a [`TextWriter`].

use crate::text::TextWriter;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use textlog_application::{EntryWriter, Logger};
use textlog_domain::{Entry, Level, Origin};
use tracing::warn;

/// Logger that renders entries as text lines.
///
/// Each line has the form
///
/// ```text
/// LMMDD HH:MM:SS.mmmZ filename.rs:## (context): msg...
/// ```
///
/// The context is a user-chosen string attached to every entry, for example
/// which component produced it.
pub struct TextLogger {
    context: String,
    writer: Arc<dyn EntryWriter>,
    min_level: AtomicI32,
}

impl TextLogger {
    pub fn new(writer: Arc<dyn EntryWriter>, context: impl Into<String>, min_level: Level) -> Self {
        Self {
            context: context.into(),
            writer,
            min_level: AtomicI32::new(min_level.as_i32()),
        }
    }

    /// Text logger writing to `sink` through a fresh [`TextWriter`].
    pub fn to_sink<W>(sink: W, context: impl Into<String>, min_level: Level) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::new(Arc::new(TextWriter::new(sink)), context, min_level)
    }

    /// Text logger writing to standard error.
    pub fn stderr(context: impl Into<String>, min_level: Level) -> Self {
        Self::to_sink(std::io::stderr(), context, min_level)
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

impl Logger for TextLogger {
    fn log(&self, level: Level, origin: &Origin, format: Option<&str>, args: &[&dyn Display]) {
        if level < self.level() {
            return;
        }

        let entry = Entry {
            level,
            time: chrono::Local::now().fixed_offset(),
            origin: origin.clone(),
            context: self.context.clone(),
            format: format.map(str::to_owned),
            args: args.iter().map(|a| a.to_string()).collect(),
        };
        if let Err(e) = self.writer.write(&entry) {
            warn!(error = %e, entry = ?entry, "Log write failed");
        }
    }

    fn level(&self) -> Level {
        Level::from_i32(self.min_level.load(Ordering::Acquire)).unwrap_or(Level::Error)
    }

    fn set_level(&self, level: Level) {
        self.min_level.store(level.as_i32(), Ordering::Release);
    }
}
