//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::commands::util::parse_instant;

/// Working day tracker.
///
/// Replays a day's start/stop log and reports how much of it was spent
/// working and how much resting.
#[derive(Debug, Parser)]
#[command(name = "oh", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report on a finished working day.
    Report {
        /// Event log to read (defaults to the configured log path).
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show progress of the current working day against the schedule.
    Status {
        /// Event log to read (defaults to the configured log path).
        file: Option<PathBuf>,

        /// Evaluate at this RFC 3339 instant instead of now.
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
