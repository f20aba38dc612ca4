//! Export command implementation
//!
//! This module implements the `export` command, which publishes the
//! `secrets` and `vars` inputs as environment variables for later steps.

use super::inputs::ExportInputs;
use crate::adapters::environment::{InMemoryEnvironment, ProcessEnvironment};
use crate::config::{EnvportConfig, ExportSettings};
use crate::core::export::{ExportOptions, ExportPipeline, ExportSummary};
use crate::domain::Result;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    #[command(flatten)]
    pub inputs: ExportInputs,

    /// Dry run mode - run against a copy of the environment and export nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// Errors are returned to the caller, which logs and reports them.
    pub fn execute(&self, config: &EnvportConfig) -> anyhow::Result<i32> {
        tracing::debug!(dry_run = self.dry_run, "Starting export command");

        let mut settings = config.export.clone();
        self.inputs.apply_to(&mut settings);

        if self.dry_run {
            println!("🔍 DRY RUN MODE - No variables will be exported");
            println!();
        }

        let summary = self.run(&settings)?;

        print_summary(&summary);
        Ok(0)
    }

    /// Runs the pipeline with the merged settings
    pub fn run(&self, settings: &ExportSettings) -> Result<ExportSummary> {
        let secrets = self.inputs.secrets_map()?;
        let vars = self.inputs.vars_map()?;
        let pipeline = ExportPipeline::new(ExportOptions::from_settings(settings));

        if self.dry_run {
            let mut env = InMemoryEnvironment::from_process();
            let mut summary = pipeline.run(&secrets, &vars, &mut env)?;
            summary.dry_run = true;
            Ok(summary)
        } else {
            let mut env = ProcessEnvironment::from_runner();
            pipeline.run(&secrets, &vars, &mut env)
        }
    }
}

fn print_summary(summary: &ExportSummary) {
    let verb = if summary.dry_run {
        "Would export"
    } else {
        "Exported"
    };

    println!();
    println!("📊 Export Summary:");
    println!("  {verb}: {}", summary.exported.len());
    for exported in &summary.exported {
        if exported.overwritten {
            println!("    - {} ({}, replaced existing)", exported.key, exported.source);
        } else {
            println!("    - {} ({})", exported.key, exported.source);
        }
    }
    println!("  Filtered out: {}", summary.filtered);
    println!("  Kept existing: {}", summary.kept_existing.len());
    for key in &summary.kept_existing {
        println!("    - {key}");
    }
    if !summary.invalid_names.is_empty() {
        println!("  Invalid names skipped: {}", summary.invalid_names.len());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs::default();
        assert!(!args.dry_run);
        assert!(args.inputs.secrets.is_none());
        assert!(args.inputs.transform.is_none());
    }

    #[test]
    fn test_dry_run_does_not_touch_process_environment() {
        let args = ExportArgs {
            inputs: ExportInputs {
                secrets: Some(r#"{"ENVPORT_DRY_RUN_ONLY_KEY":"value"}"#.to_string()),
                ..Default::default()
            },
            dry_run: true,
        };

        let summary = args.run(&ExportSettings::default()).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.exported_keys(), vec!["ENVPORT_DRY_RUN_ONLY_KEY"]);
        assert!(std::env::var("ENVPORT_DRY_RUN_ONLY_KEY").is_err());
    }

    #[test]
    fn test_execute_propagates_export_error() {
        let args = ExportArgs {
            inputs: ExportInputs {
                secrets: Some(r#"{"ENVPORT_EXECUTE_ERROR_KEY":"%%%"}"#.to_string()),
                convert: Some("utf8".to_string()),
                ..Default::default()
            },
            dry_run: true,
        };

        let err = args.execute(&EnvportConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Cannot convert value with type \"utf8\""));
    }

    #[test]
    fn test_run_reports_invalid_secrets() {
        let args = ExportArgs {
            inputs: ExportInputs {
                secrets: Some("not json".to_string()),
                ..Default::default()
            },
            dry_run: true,
        };

        let err = args.run(&ExportSettings::default()).unwrap_err();
        assert!(err.to_string().starts_with("Cannot parse JSON secrets."));
    }
}
