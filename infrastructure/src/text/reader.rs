//! Text decoder.
//!
//! Reads physical lines, classifies each one as an entry start or a
//! continuation, and reassembles logical [`LogRecord`]s.
//!
//! A line is a continuation purely because it starts with
//! [`CONTINUATION`]; its content is never inspected. Once an entry is open,
//! every following line whose first byte is a space is folded into it, even
//! if the rest of that line looks like a header.

use super::error::DecodeError;
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;
use textlog_domain::{CONTINUATION, Level, LogRecord};

static ENTRY_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([TDIE])(\d{4} \d{2}:\d{2}:\d{2}\.\d{3}(?:Z|[-+]\d{4})) (\S+?)(?::(\d+))? \((.*?)\): ",
    )
    .expect("entry header pattern is valid")
});

enum LineKind<'a> {
    Start(LogRecord),
    Continuation(&'a str),
    Unknown,
}

fn classify(line: &str) -> LineKind<'_> {
    if line.len() < CONTINUATION.len() {
        return LineKind::Unknown;
    }
    if let Some(rest) = line.strip_prefix(CONTINUATION) {
        return LineKind::Continuation(rest);
    }

    let Some(caps) = ENTRY_START.captures(line) else {
        return LineKind::Unknown;
    };
    let header = caps.get(0).map_or("", |m| m.as_str());
    let Some(level) = caps[1].chars().next().and_then(Level::from_char) else {
        return LineKind::Unknown;
    };

    LineKind::Start(LogRecord {
        header: header.to_string(),
        level,
        timestamp: caps[2].to_string(),
        file: caps[3].to_string(),
        line: caps.get(4).and_then(|m| m.as_str().parse().ok()),
        context: caps[5].to_string(),
        message: line[header.len()..].to_string(),
    })
}

/// Forward-only reader of log text.
///
/// Use [`next_record`](Self::next_record) or iterate; both stop for good
/// after end of stream or the first error.
pub struct LogReader<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    /// Returns the next logical entry, `Ok(None)` at end of stream.
    pub fn next_record(&mut self) -> Result<Option<LogRecord>, DecodeError> {
        if self.done {
            return Ok(None);
        }
        let result = self.read_entry();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn read_entry(&mut self) -> Result<Option<LogRecord>, DecodeError> {
        let mut open: Option<LogRecord> = None;
        let mut line = String::new();

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }

            match classify(&line) {
                LineKind::Continuation(rest) => match open.as_mut() {
                    Some(record) => record.message.push_str(rest),
                    None => {
                        return Err(DecodeError::OrphanContinuation { line: line.clone() });
                    }
                },
                LineKind::Start(record) => open = Some(record),
                LineKind::Unknown => return Err(DecodeError::Malformed { line: line.clone() }),
            }

            if !self.next_is_continuation()? {
                break;
            }
        }

        Ok(open.map(|mut record| {
            let trimmed = record.message.trim_end_matches(['\r', '\n']).len();
            record.message.truncate(trimmed);
            record
        }))
    }

    fn next_is_continuation(&mut self) -> std::io::Result<bool> {
        Ok(self.reader.fill_buf()?.first() == Some(&b' '))
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = Result<LogRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
