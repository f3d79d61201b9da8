//! Configuration file loading for textlog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TEXTLOG_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./textlog.toml` or `./.textlog.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/textlog/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileConfig, FileLoggerConfig, FileOutputTarget};
pub use loader::ConfigLoader;
