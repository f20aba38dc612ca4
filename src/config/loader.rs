//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::EnvportConfig;
use crate::domain::errors::EnvportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into EnvportConfig
/// 4. Applies environment variable overrides (ENVPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use envport::config::loader::load_config;
///
/// let config = load_config("envport.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EnvportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EnvportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EnvportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: EnvportConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        EnvportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration from an optional TOML file
///
/// Without a path, built-in defaults are used and only the ENVPORT_*
/// environment overrides are applied before validation.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the resulting
/// configuration is invalid
pub fn load_config_or_default(path: Option<&str>) -> Result<EnvportConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    let mut config = EnvportConfig::default();
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        EnvportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(EnvportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ENVPORT_* prefix
///
/// Environment variables follow the pattern: ENVPORT_<SECTION>_<KEY>, for
/// example ENVPORT_APPLICATION_LOG_LEVEL or ENVPORT_EXPORT_PREFIX. Unparseable
/// booleans leave the file value in place.
fn apply_env_overrides(config: &mut EnvportConfig) {
    if let Ok(val) = std::env::var("ENVPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("ENVPORT_EXPORT_PREFIX") {
        config.export.prefix = val;
    }
    if let Ok(val) = std::env::var("ENVPORT_EXPORT_SUFFIX") {
        config.export.suffix = val;
    }
    if let Ok(val) = std::env::var("ENVPORT_EXPORT_OVERRIDE") {
        if let Ok(flag) = val.parse() {
            config.export.override_existing = flag;
        }
    }
    if let Ok(val) = std::env::var("ENVPORT_EXPORT_TRANSFORM") {
        config.export.transform = Some(val);
    }
    if let Ok(val) = std::env::var("ENVPORT_EXPORT_CONVERT") {
        config.export.convert = Some(val);
    }

    if let Ok(val) = std::env::var("ENVPORT_LOGGING_LOCAL_ENABLED") {
        if let Ok(flag) = val.parse() {
            config.logging.local_enabled = flag;
        }
    }
    if let Ok(val) = std::env::var("ENVPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("ENVPORT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("ENVPORT_LOADER_TEST_VAR", "test_value");
        let input = "prefix = \"${ENVPORT_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "prefix = \"test_value\"\n");
        std::env::remove_var("ENVPORT_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("ENVPORT_LOADER_MISSING_VAR");
        let input = "prefix = \"${ENVPORT_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("ENVPORT_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("ENVPORT_LOADER_COMMENTED_VAR");
        let input = "# prefix = \"${ENVPORT_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${ENVPORT_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-envport.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[export]
only = ["^APP_"]
except = ["^APP_INTERNAL"]
prefix = "CI_"
transform = "constant"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.export.only, Some(vec!["^APP_".to_string()]));
        assert_eq!(config.export.prefix, "CI_");
        assert_eq!(config.export.transform.as_deref(), Some("constant"));
    }

    #[test]
    fn test_load_config_invalid_transform() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\ntransform = \"spongecase\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Configuration validation failed"));
        assert!(message.contains("Unknown transform value \"spongecase\""));
    }

    #[test]
    fn test_load_config_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[export\nprefix = 1\n").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, EnvportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let config = load_config_or_default(None).unwrap();
        assert!(config.export.only.is_none());
        assert!(!config.logging.local_enabled);
    }
}
