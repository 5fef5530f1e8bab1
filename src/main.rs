use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use levlog::config::{self, LoggerConfig, OutputTarget};
use levlog::{Logger, Severity};

/// Emit one leveled log line
#[derive(Debug, Parser)]
#[command(name = "levlog", version, about)]
struct Cli {
    /// Show INFO and WARNING lines
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append lines to this file instead of the console
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Severity: info, warning, error or fatal
    severity: Severity,

    /// Message words, joined with spaces
    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup diagnostics go to stderr until the logger exists
    let bootstrap = tracing_subscriber::registry().with(env_filter()).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .without_time()
            .with_target(true),
    );
    let logger = tracing::subscriber::with_default(bootstrap, || build_logger(&cli))?;

    // From here on our own diagnostics go out through the ERROR writer
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(logger.error_logger())
                .with_ansi(false)
                .without_time()
                .with_target(true),
        )
        .init();

    let message = cli.message.join(" ");
    match cli.severity {
        Severity::Info => logger.info(format_args!("{}", message)),
        Severity::Warning => logger.warning(format_args!("{}", message)),
        Severity::Error => logger.error(format_args!("{}", message)),
        Severity::Fatal => logger.fatal(format_args!("{}", message)),
    }

    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "levlog=warn".into())
}

fn build_logger(cli: &Cli) -> Result<Logger> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::config_file_path);
    let mut cfg = LoggerConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if cli.verbose {
        cfg.verbose = true;
    }
    if let Some(path) = &cli.output {
        cfg.output = OutputTarget::File {
            path: path.clone(),
            append: true,
        };
    }

    Logger::from_config(&cfg).context("Failed to set up logger")
}
