// Envport - CI secret and variable exporter
// Copyright (c) 2025 Envport Contributors
// Licensed under the MIT License

use clap::Parser;
use envport::adapters::runner::report_failure;
use envport::cli::{Cli, Commands};
use envport::config::{load_config_or_default, EnvportConfig, LoggingConfig};
use envport::log_error_with_context;
use envport::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Init(_) => Ok(EnvportConfig::default()),
        _ => load_config_or_default(cli.config.as_deref()),
    };

    let logging_config = match &config {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "envport - CI secret and variable exporter"
    );

    let exit_code = match config {
        Ok(config) => match execute_command(&cli, &config) {
            Ok(code) => code,
            Err(e) => {
                log_error_with_context!(&e, "Command execution failed");
                report_failure(&e.to_string());
                1
            }
        },
        Err(e) => {
            log_error_with_context!(&e, "Failed to load configuration");
            report_failure(&e.to_string());
            2
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &EnvportConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref(), config),
        Commands::Init(args) => args.execute(),
    }
}
