//! BM Search - Main entrypoint.
//!
//! Parses arguments, loads configuration, initializes logging and runs the
//! requested command. Finding no match is a normal outcome and exits with 0.

use std::io;

use anyhow::Context;
use bm_search_lib::cli::{self, Args, Command, SearchArgs};
use bm_search_lib::config::{ConfigLoader, LogConfig, ENV_PREFIX};
use bm_search_lib::error::{AppError, AppResult};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with search output. `RUST_LOG`
/// overrides the configured level.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("failed to load configuration")?;

    init_logging(&config.log)?;

    let command = args
        .command
        .unwrap_or_else(|| Command::Search(SearchArgs::default()));

    cli::run(command, config, io::stdin().lock(), io::stdout().lock())
        .context("command failed")?;

    Ok(())
}
