//! Console output formatter for decoded records

use colored::Colorize;
use textlog_domain::{CONTINUATION, Level, LogRecord};

/// Formats decoded records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a record in the canonical text form, without a trailing newline
    pub fn format_plain(record: &LogRecord) -> String {
        format!("{}{}", record.header, Self::indent_message(&record.message))
    }

    /// Format a record with a colored level and context
    pub fn format_colored(record: &LogRecord) -> String {
        let level = Self::colored_level(record.level, &record.level.as_char().to_string());
        let origin = match record.line {
            Some(line) => format!("{}:{}", record.file, line),
            None => record.file.clone(),
        };
        format!(
            "{}{} {} ({}): {}",
            level,
            record.timestamp.dimmed(),
            origin,
            record.context.cyan(),
            Self::indent_message(&record.message)
        )
    }

    /// Format a record as a single JSON line
    pub fn format_json(record: &LogRecord) -> String {
        serde_json::to_string(record).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    fn colored_level(level: Level, text: &str) -> String {
        match level {
            Level::Trace => text.dimmed().to_string(),
            Level::Debug => text.blue().to_string(),
            Level::Info => text.green().bold().to_string(),
            Level::Error => text.red().bold().to_string(),
        }
    }

    fn indent_message(message: &str) -> String {
        message.replace('\n', &format!("\n{CONTINUATION}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            header: "I0101 00:00:00.000Z main.rs:7 (ctx): ".to_string(),
            level: Level::Info,
            timestamp: "0101 00:00:00.000Z".to_string(),
            file: "main.rs".to_string(),
            line: Some(7),
            context: "ctx".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_plain_reproduces_canonical_text() {
        assert_eq!(
            ConsoleFormatter::format_plain(&record("a\nb")),
            format!("I0101 00:00:00.000Z main.rs:7 (ctx): a\n{CONTINUATION}b")
        );
    }

    #[test]
    fn test_colored_without_colors_matches_plain() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_colored(&record("hello")),
            ConsoleFormatter::format_plain(&record("hello"))
        );
        colored::control::unset_override();
    }

    #[test]
    fn test_json_has_all_fields() {
        let json = ConsoleFormatter::format_json(&record("hello"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["context"], "ctx");
        assert_eq!(value["line"], 7);
        assert_eq!(value["message"], "hello");
    }
}
