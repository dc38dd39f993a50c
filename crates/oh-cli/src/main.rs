use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use oh_cli::commands::{report, status};
use oh_cli::{Cli, Commands, Config};

/// Picks the log given on the command line, or the configured one.
fn log_path(file: Option<&PathBuf>, config: &Config) -> PathBuf {
    file.cloned().unwrap_or_else(|| config.log_path.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Report { file, json }) => {
            report::run(&mut stdout, &log_path(file.as_ref(), &config), *json)?;
        }
        Some(Commands::Status { file, at, json }) => {
            let now = at.unwrap_or_else(Utc::now);
            status::run(
                &mut stdout,
                &log_path(file.as_ref(), &config),
                &config.schedule,
                now,
                *json,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
