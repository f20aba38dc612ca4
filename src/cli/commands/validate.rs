//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which checks the
//! configuration file together with the action inputs without exporting
//! anything.

use super::inputs::ExportInputs;
use crate::config::EnvportConfig;
use crate::core::export::ExportOptions;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: ExportInputs,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>, config: &EnvportConfig) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("built-in defaults");
        tracing::info!(config = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let mut settings = config.export.clone();
        self.inputs.apply_to(&mut settings);

        let options = ExportOptions::from_settings(&settings);
        if let Err(e) = options.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            return Ok(2);
        }

        let (secrets, vars) = match (self.inputs.secrets_map(), self.inputs.vars_map()) {
            (Ok(secrets), Ok(vars)) => (secrets, vars),
            (Err(e), _) | (_, Err(e)) => {
                println!("❌ Input validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match options.filter.only_count() {
            Some(count) => println!("  Only Patterns: {count}"),
            None => println!("  Only Patterns: (all keys)"),
        }
        println!("  Except Patterns: {}", options.filter.except_count());
        println!("  Prefix: {:?}", settings.prefix);
        println!("  Suffix: {:?}", settings.suffix);
        println!("  Override: {}", options.override_existing);
        match options.renamer.transform().known() {
            Some(transform) => println!("  Transform: {transform}"),
            None => println!("  Transform: none"),
        }
        match options.conversion.known() {
            Some(conversion) => println!("  Convert: {conversion}"),
            None => println!("  Convert: none"),
        }
        println!("  Secrets: {} entries", secrets.len());
        println!("  Vars: {} entries", vars.len());
        println!();
        Ok(0)
    }
}
