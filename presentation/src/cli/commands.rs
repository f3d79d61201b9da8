//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use regex::Regex;
use std::path::PathBuf;
use textlog_domain::{Level, LevelParseError};

/// Output format for decoded records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Canonical log text, as written
    #[default]
    Plain,
    /// Canonical log text with colored level and context
    Color,
    /// One JSON object per record
    Json,
}

/// CLI arguments for textlog
#[derive(Parser, Debug)]
#[command(name = "textlog")]
#[command(author, version, about = "Read, filter and emit text log entries")]
#[command(long_about = r#"
textlog reads and writes logs in the line format

  LMMDD HH:MM:SS.mmmZ file.rs:## (context): message

where L is the level (T, D, I, E). Lines after the first of a multi-line
entry start with four spaces.

Configuration files are loaded from (in priority order):
1. TEXTLOG_LOGGER__<FIELD>        Environment variables
2. --config <path>                Explicit config file
3. ./textlog.toml                 Project-level config
4. ~/.config/textlog/config.toml  Global config

Example:
  textlog read app.log --min-level info --context '^Flow='
  textlog emit --level error "disk" "full"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a log stream and print its entries
    Read(ReadArgs),
    /// Write one entry through the configured logger
    Emit(EmitArgs),
    /// Show configuration sources and the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Log file to read; `-` or omitted reads standard input
    pub file: Option<PathBuf>,

    /// Skip entries below this level
    #[arg(long, value_name = "LEVEL", value_parser = parse_level, default_value = "trace")]
    pub min_level: Level,

    /// Only show entries whose context matches this regex
    #[arg(long, value_name = "REGEX", value_parser = Regex::new)]
    pub context: Option<Regex>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Values to log, joined by spaces (or template arguments with --format)
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Level of the entry
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_level, default_value = "info")]
    pub level: Level,

    /// Template whose `{}` placeholders are filled from the values
    #[arg(short, long, value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// Override the configured context
    #[arg(long, value_name = "CONTEXT")]
    pub context: Option<String>,

    /// Also write the entry to standard output
    #[arg(long)]
    pub tee_stdout: bool,
}

fn parse_level(s: &str) -> Result<Level, LevelParseError> {
    Level::parse(s)
}
