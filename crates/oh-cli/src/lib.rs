//! Working day tracker CLI library.
//!
//! This crate provides the CLI interface for office hours tracking.

mod cli;
pub mod commands;
mod config;
pub mod logfile;

pub use cli::{Cli, Commands};
pub use config::Config;
