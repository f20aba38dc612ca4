//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "envport.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing envport configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: envport --config {} validate-config", self.output);
                println!("  3. Run export: envport --config {} export", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(1)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# envport configuration file

[application]
log_level = "info"

[export]
except = []
prefix = ""
suffix = ""
override = true
transform_prefix = true
transform_suffix = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# envport configuration file
#
# Every setting has a default, so any section or key can be left out.
# Action inputs (INPUT_* variables or CLI flags) take precedence over this
# file. Values may reference environment variables as ${VAR_NAME}.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
log_level = "info"

# ============================================================================
# Export Settings
# ============================================================================
[export]
# Only export keys matching at least one of these regex patterns.
# Patterns are unanchored: "SECRET" matches "MY_SECRET_1".
# only = ["^APP_", "^DEPLOY_"]

# Never export keys matching one of these patterns.
# "github_token" is always excluded.
except = []

# Text added before and after every exported key
prefix = ""
suffix = ""

# Replace variables that already have a non-empty value
override = true

# Case transform for keys:
# lowercase | uppercase | camelcase | constant | pascalcase | snakecase
# transform = "snakecase"

# Whether prefix and suffix are rewritten by the transform too.
# When false they are added literally after the transform.
transform_prefix = true
transform_suffix = true

# Value conversion: base64 (encode) | utf8 (decode base64)
# convert = "base64"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to rolling files
local_enabled = false

# Directory for log files
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvportConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_configs_are_valid() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: EnvportConfig = toml::from_str(&content).unwrap();
            assert!(config.validate().is_ok());
            assert!(config.export.override_existing);
            assert!(config.export.transform.is_none());
        }
    }

    #[test]
    fn test_init_writes_file_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("envport.toml");
        let mut args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: true,
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("transform_prefix"));

        assert_eq!(args.execute().unwrap(), 2);

        args.force = true;
        args.with_examples = false;
        assert_eq!(args.execute().unwrap(), 0);
    }
}
