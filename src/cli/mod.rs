//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for envport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// envport - export CI secrets and variables as environment variables
#[derive(Parser, Debug)]
#[command(name = "envport")]
#[command(version, about, long_about = None)]
#[command(author = "Envport Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "ENVPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENVPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export secrets and vars as environment variables
    Export(commands::export::ExportArgs),

    /// Validate configuration file and action inputs
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
