//! The in-memory log record handed to an encoder.

use super::level::Level;
use chrono::{DateTime, FixedOffset, Utc};
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Source position a log call came from.
///
/// Both parts are optional: an unknown file renders as `???`, an unknown
/// line is omitted from the rendered origin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Origin {
    pub file: Option<Cow<'static, str>>,
    pub line: Option<u32>,
}

impl Origin {
    /// An origin with neither file nor line.
    pub const UNKNOWN: Origin = Origin {
        file: None,
        line: None,
    };

    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// Origin of whoever called the enclosing `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// File-only origin.
    pub fn file_only(file: impl Into<Cow<'static, str>>) -> Self {
        Self {
            file: Some(file.into()),
            line: None,
        }
    }
}

impl From<&'static Location<'static>> for Origin {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// One immutable snapshot of a log event.
///
/// Arguments are kept as their textual rendering; the encoder never looks
/// at them beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub time: DateTime<FixedOffset>,
    pub origin: Origin,
    pub context: String,
    /// Message template; `None` joins `args` with single spaces.
    pub format: Option<String>,
    pub args: Vec<String>,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            level: Level::default(),
            time: DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            origin: Origin::UNKNOWN,
            context: String::new(),
            format: None,
            args: Vec::new(),
        }
    }
}

impl Entry {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        self.args = args.into_iter().map(|a| a.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_has_unknown_origin() {
        let entry = Entry::default();
        assert_eq!(entry.origin, Origin::UNKNOWN);
        assert_eq!(entry.time.timestamp(), 0);
        assert!(entry.format.is_none());
    }

    #[test]
    fn test_builder_renders_args_to_text() {
        let entry = Entry::new(Level::Info)
            .with_context("ctx")
            .with_args([&"Hi" as &dyn fmt::Display, &4]);
        assert_eq!(entry.args, vec!["Hi".to_string(), "4".to_string()]);
        assert_eq!(entry.context, "ctx");
        assert_eq!(entry.level, Level::Info);
    }

    #[test]
    fn test_caller_points_at_this_file() {
        let origin = Origin::caller();
        assert!(origin.file.as_deref().unwrap().ends_with("entry.rs"));
        assert!(origin.line.is_some());
    }
}
