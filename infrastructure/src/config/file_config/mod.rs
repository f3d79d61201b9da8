//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and resolved into application settings.

mod logger;

pub use logger::{FileLoggerConfig, FileOutputTarget};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A problem found while validating configuration.
///
/// Issues never abort loading; the offending value is replaced with a
/// default and the issue is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field, e.g. `logger.level`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Logger settings
    pub logger: FileLoggerConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.logger.to_settings("").1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_issue_display() {
        let issue = ConfigIssue::new("logger.level", "bad");
        assert_eq!(issue.to_string(), "logger.level: bad");
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let text = toml::to_string_pretty(&FileConfig::default()).unwrap();
        assert!(text.contains("[logger]"));
        assert!(text.contains("level = \"trace\""));
    }
}
