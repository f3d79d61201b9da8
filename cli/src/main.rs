//! CLI entrypoint for textlog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;
use textlog_application::{Logger, RecordQuery, TeeLogger};
use textlog_domain::Origin;
use textlog_infrastructure::logging::system;
use textlog_infrastructure::{ConfigLoader, FileConfig, LogReader, TextLogger, build_text_logger};
use textlog_presentation::{Cli, Command, ConsoleFormatter, EmitArgs, OutputFormat, ReadArgs};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize diagnostics based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting textlog");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{e}"))?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    match cli.command {
        Command::Read(args) => run_read(args),
        Command::Emit(args) => run_emit(&config, args),
        Command::Config => {
            ConfigLoader::print_config_sources();
            println!();
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn run_read(args: ReadArgs) -> Result<()> {
    let input: Box<dyn BufRead> = match args.file.as_deref() {
        None => Box::new(io::stdin().lock()),
        Some(path) if path.as_os_str() == "-" => Box::new(io::stdin().lock()),
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
    };

    let mut query = RecordQuery::new().with_min_level(args.min_level);
    if let Some(pattern) = args.context {
        query = query.with_context(pattern);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in query.filter(LogReader::new(input)) {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                out.flush()?;
                if let Some(line) = e.line() {
                    warn!(line = %line.trim_end(), "Stopping at undecodable line");
                }
                bail!(e);
            }
        };
        let text = match args.output {
            OutputFormat::Plain => ConsoleFormatter::format_plain(&record),
            OutputFormat::Color => ConsoleFormatter::format_colored(&record),
            OutputFormat::Json => ConsoleFormatter::format_json(&record),
        };
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

fn run_emit(config: &FileConfig, args: EmitArgs) -> Result<()> {
    let (mut settings, _) = config.logger.to_settings(&system::binary_name());
    if let Some(context) = args.context {
        settings.context = context;
    }

    let primary: Arc<dyn Logger> = Arc::new(build_text_logger(&settings)?);
    let logger: Arc<dyn Logger> = if args.tee_stdout {
        let echo = TextLogger::to_sink(io::stdout(), settings.context.clone(), settings.level);
        Arc::new(TeeLogger::new(vec![primary, Arc::new(echo)]))
    } else {
        primary
    };
    system::set_system(logger);

    let values: Vec<&dyn std::fmt::Display> = args
        .values
        .iter()
        .map(|v| v as &dyn std::fmt::Display)
        .collect();
    system::system().log(args.level, &Origin::UNKNOWN, args.format.as_deref(), &values);
    Ok(())
}
