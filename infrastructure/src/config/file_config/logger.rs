//! Logger configuration from TOML (`[logger]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use textlog_application::{DEFAULT_CAPTURE_CAPACITY, Destination, LoggerSettings};
use textlog_domain::Level;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputTarget {
    #[default]
    Stderr,
    Stdout,
    File,
}

/// Raw logger configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Minimum level name (`t`/`trace`, `d`/`debug`, `i`/`info`, `e`/`error`)
    pub level: String,
    /// Context string attached to every entry; defaults to the binary name
    pub context: Option<String>,
    pub output: FileOutputTarget,
    /// Log file, required when `output = "file"`
    pub path: Option<PathBuf>,
    /// Capacity of in-memory capture loggers
    pub capture_capacity: usize,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Trace.name().to_string(),
            context: None,
            output: FileOutputTarget::default(),
            path: None,
            capture_capacity: DEFAULT_CAPTURE_CAPACITY,
        }
    }
}

impl FileLoggerConfig {
    /// Parse the level name, falling back to `trace` with an issue.
    pub fn parse_level(&self) -> (Level, Option<ConfigIssue>) {
        match Level::parse(&self.level) {
            Ok(level) => (level, None),
            Err(e) => (
                Level::Trace,
                Some(ConfigIssue::new(
                    "logger.level",
                    format!("{e}, falling back to 'trace'"),
                )),
            ),
        }
    }

    /// Resolve the destination, falling back to stderr with an issue.
    pub fn parse_destination(&self) -> (Destination, Option<ConfigIssue>) {
        match (self.output, &self.path) {
            (FileOutputTarget::Stderr, _) => (Destination::Stderr, None),
            (FileOutputTarget::Stdout, _) => (Destination::Stdout, None),
            (FileOutputTarget::File, Some(path)) => (Destination::File(path.clone()), None),
            (FileOutputTarget::File, None) => (
                Destination::Stderr,
                Some(ConfigIssue::new(
                    "logger.path",
                    "output = \"file\" requires a path, falling back to stderr",
                )),
            ),
        }
    }

    /// Build resolved settings plus any issues found along the way.
    pub fn to_settings(&self, default_context: &str) -> (LoggerSettings, Vec<ConfigIssue>) {
        let (level, level_issue) = self.parse_level();
        let (destination, destination_issue) = self.parse_destination();
        let settings = LoggerSettings {
            level,
            context: self
                .context
                .clone()
                .unwrap_or_else(|| default_context.to_string()),
            destination,
            capture_capacity: self.capture_capacity,
        };
        let issues = level_issue.into_iter().chain(destination_issue).collect();
        (settings, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_logger_section_deserialize() {
        let toml_str = r#"
[logger]
level = "I"
context = "worker"
output = "file"
path = "/var/log/app.log"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (settings, issues) = config.logger.to_settings("bin");
        assert!(issues.is_empty());
        assert_eq!(settings.level, Level::Info);
        assert_eq!(settings.context, "worker");
        assert_eq!(
            settings.destination,
            Destination::File(PathBuf::from("/var/log/app.log"))
        );
        assert_eq!(settings.capture_capacity, DEFAULT_CAPTURE_CAPACITY);
    }

    #[test]
    fn test_context_defaults_to_given_name() {
        let (settings, _) = FileLoggerConfig::default().to_settings("mybin");
        assert_eq!(settings.context, "mybin");
        assert_eq!(settings.level, Level::Trace);
        assert_eq!(settings.destination, Destination::Stderr);
    }

    #[test]
    fn test_invalid_values_produce_issues() {
        let config = FileLoggerConfig {
            level: "loud".to_string(),
            output: FileOutputTarget::File,
            ..FileLoggerConfig::default()
        };
        let (settings, issues) = config.to_settings("bin");
        assert_eq!(settings.level, Level::Trace);
        assert_eq!(settings.destination, Destination::Stderr);
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["logger.level", "logger.path"]);
    }
}
