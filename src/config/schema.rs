//! Configuration schema types
//!
//! This module defines the configuration structure for envport. Every section
//! and field has a default, so an empty file (or no file at all) is a valid
//! configuration that exports every key unchanged.

use crate::core::export::ExportOptions;
use serde::{Deserialize, Serialize};

/// Main envport configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Filtering, renaming and conversion settings
    #[serde(default)]
    pub export: ExportSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EnvportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export settings as written by the user
///
/// These are the raw, string-typed settings. [`ExportOptions::from_settings`]
/// turns them into the typed options the pipeline runs with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Regex patterns a key must match to be exported (unset = no filter)
    #[serde(default)]
    pub only: Option<Vec<String>>,

    /// Regex patterns excluding a key (`github_token` is always added)
    #[serde(default)]
    pub except: Vec<String>,

    /// Literal text prepended to every key
    #[serde(default)]
    pub prefix: String,

    /// Literal text appended to every key
    #[serde(default)]
    pub suffix: String,

    /// Replace variables that already exist in the environment
    #[serde(rename = "override", default = "default_true")]
    pub override_existing: bool,

    /// Case transform applied to the key
    #[serde(default)]
    pub transform: Option<String>,

    /// Whether the prefix takes part in the case transform
    #[serde(default = "default_true")]
    pub transform_prefix: bool,

    /// Whether the suffix takes part in the case transform
    #[serde(default = "default_true")]
    pub transform_suffix: bool,

    /// Conversion applied to the value
    #[serde(default)]
    pub convert: Option<String>,
}

impl ExportSettings {
    fn validate(&self) -> Result<(), String> {
        ExportOptions::from_settings(self)
            .validate()
            .map_err(|e| e.to_string())
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            only: None,
            except: Vec::new(),
            prefix: String::new(),
            suffix: String::new(),
            override_existing: true,
            transform: None,
            transform_prefix: true,
            transform_suffix: true,
            convert: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation (daily, hourly or never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled is true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn test_export_settings_defaults() {
        let settings = ExportSettings::default();
        assert!(settings.only.is_none());
        assert!(settings.except.is_empty());
        assert!(settings.override_existing);
        assert!(settings.transform_prefix);
        assert!(settings.transform_suffix);
        assert!(settings.transform.is_none());
        assert!(settings.convert.is_none());
    }

    #[test]
    fn test_export_settings_validation() {
        let mut settings = ExportSettings {
            transform: Some("snakecase".to_string()),
            convert: Some("base64".to_string()),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());

        settings.transform = Some("kebabcase".to_string());
        let err = settings.validate().unwrap_err();
        assert!(err.starts_with("Unknown transform value \"kebabcase\""));

        settings.transform = None;
        settings.convert = Some("hex".to_string());
        let err = settings.validate().unwrap_err();
        assert!(err.starts_with("Cannot convert value with type \"hex\""));

        settings.convert = None;
        settings.except = vec!["(unclosed".to_string()];
        let err = settings.validate().unwrap_err();
        assert!(err.contains("(unclosed"));
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: EnvportConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(config.export.override_existing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_field_name() {
        let config: EnvportConfig = toml::from_str(
            r#"
[export]
override = false
transform_prefix = false
"#,
        )
        .unwrap();
        assert!(!config.export.override_existing);
        assert!(!config.export.transform_prefix);
        assert!(config.export.transform_suffix);
    }
}
