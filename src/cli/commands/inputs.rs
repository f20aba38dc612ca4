//! Action inputs shared by `export` and `validate-config`
//!
//! Every input can be passed as a flag or, the way a runner passes action
//! inputs, as an `INPUT_<NAME>` environment variable. Blank values count as
//! not provided, so file settings stay in effect.

use crate::config::ExportSettings;
use crate::core::filter::split_patterns;
use crate::domain::{InputMap, InputSource, Result};
use clap::Args;

/// Action inputs
#[derive(Args, Debug, Clone, Default)]
pub struct ExportInputs {
    /// JSON object of secrets to export
    #[arg(long, env = "INPUT_SECRETS", hide_env_values = true)]
    pub secrets: Option<String>,

    /// JSON object of variables to export
    #[arg(long, env = "INPUT_VARS", hide_env_values = true)]
    pub vars: Option<String>,

    /// Comma-separated regex patterns a key must match
    #[arg(long, env = "INPUT_ONLY")]
    pub only: Option<String>,

    /// Comma-separated regex patterns excluding a key
    #[arg(long, env = "INPUT_EXCEPT")]
    pub except: Option<String>,

    /// Text prepended to every key
    #[arg(long, env = "INPUT_PREFIX")]
    pub prefix: Option<String>,

    /// Text appended to every key
    #[arg(long, env = "INPUT_SUFFIX")]
    pub suffix: Option<String>,

    /// Replace variables that already exist ("true" or "false")
    #[arg(long = "override", env = "INPUT_OVERRIDE", value_name = "BOOL")]
    pub override_existing: Option<String>,

    /// Case transform applied to keys
    #[arg(long, env = "INPUT_TRANSFORM")]
    pub transform: Option<String>,

    /// Whether the prefix takes part in the transform ("true" or "false")
    #[arg(long, env = "INPUT_TRANSFORMPREFIX", value_name = "BOOL")]
    pub transform_prefix: Option<String>,

    /// Whether the suffix takes part in the transform ("true" or "false")
    #[arg(long, env = "INPUT_TRANSFORMSUFFIX", value_name = "BOOL")]
    pub transform_suffix: Option<String>,

    /// Conversion applied to values
    #[arg(long, env = "INPUT_CONVERT")]
    pub convert: Option<String>,
}

impl ExportInputs {
    /// Overlays the provided inputs on top of file settings
    pub fn apply_to(&self, settings: &mut ExportSettings) {
        if let Some(only) = provided(&self.only) {
            settings.only = Some(split_patterns(only));
        }
        if let Some(except) = provided(&self.except) {
            settings.except = split_patterns(except);
        }
        if let Some(prefix) = provided(&self.prefix) {
            settings.prefix = prefix.to_string();
        }
        if let Some(suffix) = provided(&self.suffix) {
            settings.suffix = suffix.to_string();
        }
        if let Some(flag) = provided(&self.override_existing) {
            settings.override_existing = parse_flag(flag);
        }
        if let Some(transform) = provided(&self.transform) {
            settings.transform = Some(transform.trim().to_string());
        }
        if let Some(flag) = provided(&self.transform_prefix) {
            settings.transform_prefix = parse_flag(flag);
        }
        if let Some(flag) = provided(&self.transform_suffix) {
            settings.transform_suffix = parse_flag(flag);
        }
        if let Some(convert) = provided(&self.convert) {
            settings.convert = Some(convert.trim().to_string());
        }
    }

    /// Parses the `secrets` input
    pub fn secrets_map(&self) -> Result<InputMap> {
        input_map(InputSource::Secret, &self.secrets)
    }

    /// Parses the `vars` input
    pub fn vars_map(&self) -> Result<InputMap> {
        input_map(InputSource::Var, &self.vars)
    }
}

fn input_map(source: InputSource, json: &Option<String>) -> Result<InputMap> {
    match provided(json) {
        Some(json) => InputMap::from_json(source, json),
        None => Ok(InputMap::empty(source)),
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Boolean inputs are true only for the exact text `true`
fn parse_flag(value: &str) -> bool {
    value.trim() == "true"
}
