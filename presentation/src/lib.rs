//! Presentation layer for textlog
//!
//! This crate contains the CLI definitions and the console formatting of
//! decoded log records.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EmitArgs, OutputFormat, ReadArgs};
pub use output::console::ConsoleFormatter;
