//! Continuation-line prefixing.

use std::fmt;
use textlog_domain::CONTINUATION;

/// [`fmt::Write`] adapter that prefixes every line after the first with
/// [`CONTINUATION`].
///
/// The prefix is emitted lazily, right before the first character that
/// follows a newline, so a trailing newline never leaves a dangling prefix.
pub struct ContinuationWriter<'a> {
    out: &'a mut String,
    at_line_start: bool,
}

impl<'a> ContinuationWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self {
            out,
            at_line_start: false,
        }
    }
}

impl fmt::Write for ContinuationWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for (i, line) in s.split_inclusive('\n').enumerate() {
            if self.at_line_start || i > 0 {
                self.out.push_str(CONTINUATION);
            }
            self.out.push_str(line);
            self.at_line_start = false;
        }
        if s.ends_with('\n') {
            self.at_line_start = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    fn prefixed(parts: &[&str]) -> String {
        let mut out = String::new();
        let mut w = ContinuationWriter::new(&mut out);
        for part in parts {
            w.write_str(part).unwrap();
        }
        out
    }

    #[test]
    fn test_first_line_is_not_prefixed() {
        assert_eq!(prefixed(&["single line"]), "single line");
    }

    #[test]
    fn test_following_lines_are_prefixed() {
        assert_eq!(prefixed(&["a\nb\nc\n"]), "a\n    b\n    c\n");
    }

    #[test]
    fn test_prefix_carries_across_writes() {
        assert_eq!(prefixed(&["a\n", "b", "\n", "c"]), "a\n    b\n    c");
    }

    #[test]
    fn test_empty_lines_still_get_prefix() {
        assert_eq!(prefixed(&["a\n\nb"]), "a\n    \n    b");
    }
}
