//! Record filtering for log tailing and searching.
//!
//! [`RecordQuery`] decides whether a decoded [`LogRecord`] is of interest;
//! [`FilteredRecords`] applies it to any stream of decode results, skipping
//! whole logical entries (continuation lines included) and passing errors
//! through untouched.

use regex::Regex;
use textlog_domain::{Level, LogRecord};

/// Selection criteria for decoded records.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub min_level: Level,
    pub context: Option<Regex>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_context(mut self, pattern: Regex) -> Self {
        self.context = Some(pattern);
        self
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if record.level < self.min_level {
            return false;
        }
        match &self.context {
            Some(pattern) => pattern.is_match(&record.context),
            None => true,
        }
    }

    /// Wrap a stream of decode results so only matching records come out.
    pub fn filter<I, E>(self, records: I) -> FilteredRecords<I::IntoIter>
    where
        I: IntoIterator<Item = Result<LogRecord, E>>,
    {
        FilteredRecords {
            inner: records.into_iter(),
            query: self,
        }
    }
}

/// Iterator adapter produced by [`RecordQuery::filter`].
pub struct FilteredRecords<I> {
    inner: I,
    query: RecordQuery,
}

impl<I, E> Iterator for FilteredRecords<I>
where
    I: Iterator<Item = Result<LogRecord, E>>,
{
    type Item = Result<LogRecord, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(record) if !self.query.matches(&record) => continue,
                other => return Some(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: Level, context: &str, message: &str) -> LogRecord {
        LogRecord {
            header: String::new(),
            level,
            timestamp: "0101 00:00:00.000Z".to_string(),
            file: "main.rs".to_string(),
            line: Some(1),
            context: context.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_default_query_matches_everything() {
        let query = RecordQuery::new();
        assert!(query.matches(&record(Level::Trace, "", "x")));
    }

    #[test]
    fn test_min_level_and_context_both_apply() {
        let query = RecordQuery::new()
            .with_min_level(Level::Info)
            .with_context(Regex::new("^Flow=").unwrap());

        assert!(query.matches(&record(Level::Info, "Flow=f1", "x")));
        assert!(!query.matches(&record(Level::Debug, "Flow=f1", "x")));
        assert!(!query.matches(&record(Level::Error, "Block=b", "x")));
    }

    #[test]
    fn test_filter_skips_records_and_keeps_errors() {
        let input: Vec<Result<LogRecord, String>> = vec![
            Ok(record(Level::Debug, "a", "skipped")),
            Ok(record(Level::Error, "a", "kept")),
            Err("bad line".to_string()),
            Ok(record(Level::Info, "b", "also kept")),
        ];

        let out: Vec<_> = RecordQuery::new()
            .with_min_level(Level::Info)
            .filter(input)
            .collect();

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_ref().unwrap().message, "kept");
        assert_eq!(out[1].as_ref().unwrap_err(), "bad line");
        assert_eq!(out[2].as_ref().unwrap().message, "also kept");
    }
}
