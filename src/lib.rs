// Envport - CI secret and variable exporter
// Copyright (c) 2025 Envport Contributors
// Licensed under the MIT License

//! # envport - CI secret and variable exporter
//!
//! envport takes the `secrets` and `vars` maps of a CI job, serialized as
//! JSON, and exports each entry as an environment variable for the rest of
//! the job.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Selecting** keys with `only`/`except` regular expressions
//! - **Renaming** keys with a prefix, a suffix and a case transform
//! - **Converting** values to or from base64
//! - **Publishing** variables to the process and to the runner
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (filter, transform, convert, export)
//! - [`adapters`] - Environment backends and runner workflow commands
//! - [`domain`] - Input maps and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envport::adapters::environment::ProcessEnvironment;
//! use envport::config::load_config;
//! use envport::core::export::{ExportOptions, ExportPipeline};
//! use envport::domain::{InputMap, InputSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("envport.toml")?;
//!     let pipeline = ExportPipeline::new(ExportOptions::from_settings(&config.export));
//!
//!     let secrets = InputMap::from_json(InputSource::Secret, r#"{"API_KEY":"abc"}"#)?;
//!     let vars = InputMap::from_json(InputSource::Var, r#"{"REGION":"eu-west-1"}"#)?;
//!
//!     let mut env = ProcessEnvironment::from_runner();
//!     let summary = pipeline.run(&secrets, &vars, &mut env)?;
//!
//!     println!("Exported {} variables", summary.exported.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! envport uses the [`domain::EnvportError`] type for all errors. The first
//! error aborts an export; variables published before it stay published.
//!
//! ## Logging
//!
//! envport uses structured logging with the `tracing` crate. Keys are logged,
//! values never are.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
