//! Builds loggers from resolved settings.

use super::text_logger::TextLogger;
use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use textlog_application::{CaptureLogger, Destination, LoggerSettings};
use tracing::debug;

/// Build a [`TextLogger`] for `settings`.
///
/// File destinations are opened in append mode and created if missing,
/// together with their parent directories.
pub fn build_text_logger(settings: &LoggerSettings) -> io::Result<TextLogger> {
    let (context, level) = (settings.context.clone(), settings.level);
    let logger = match &settings.destination {
        Destination::Stderr => TextLogger::stderr(context, level),
        Destination::Stdout => TextLogger::to_sink(io::stdout(), context, level),
        Destination::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            debug!("Logging to {}", path.display());
            TextLogger::to_sink(BufWriter::new(file), context, level)
        }
    };
    Ok(logger)
}

/// Build an in-memory [`CaptureLogger`] sized by `settings.capture_capacity`.
pub fn build_capture_logger(settings: &LoggerSettings) -> CaptureLogger {
    debug!("Capturing up to {} messages", settings.capture_capacity);
    CaptureLogger::with_capacity(settings.capture_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LogReader;
    use std::fs::File;
    use std::io::BufReader;
    use textlog_application::Logger;
    use textlog_domain::Level;

    #[test]
    fn test_file_destination_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");
        let settings = LoggerSettings::default()
            .with_level(Level::Info)
            .with_context("svc")
            .with_destination(Destination::File(path.clone()));

        let logger = build_text_logger(&settings).unwrap();
        logger.debug(&[&"filtered"]);
        logger.info(&[&"first"]);
        drop(logger);

        let logger = build_text_logger(&settings).unwrap();
        logger.errorf("second\n{}", &[&"detail"]);
        drop(logger);

        let records: Vec<_> = LogReader::new(BufReader::new(File::open(&path).unwrap()))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[0].context, "svc");
        assert_eq!(records[1].level, Level::Error);
        assert_eq!(records[1].message, "second\ndetail");
    }

    #[test]
    fn test_capture_logger_uses_configured_capacity() {
        let settings = LoggerSettings::default().with_capture_capacity(2);
        let capture = build_capture_logger(&settings);
        for word in ["one", "two", "three"] {
            capture.info(&[&word]);
        }
        let msgs: Vec<_> = capture.drain().into_iter().map(|m| m.msg).collect();
        assert_eq!(msgs, vec!["one", "two"]);
    }

    #[test]
    fn test_capture_capacity_flows_from_config() {
        let config: crate::config::FileConfig =
            toml::from_str("[logger]\ncapture_capacity = 1\n").unwrap();
        let (settings, issues) = config.logger.to_settings("bin");
        assert!(issues.is_empty());
        let capture = build_capture_logger(&settings);
        capture.error(&[&"kept"]);
        capture.error(&[&"dropped"]);
        assert_eq!(capture.drain().len(), 1);
    }

    #[test]
    fn test_stderr_destination_keeps_settings() {
        let settings = LoggerSettings::default().with_context("cli").with_level(Level::Debug);
        let logger = build_text_logger(&settings).unwrap();
        assert_eq!(logger.context(), "cli");
        assert_eq!(logger.level(), Level::Debug);
    }
}
