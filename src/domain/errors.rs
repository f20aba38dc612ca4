//! Domain error types
//!
//! This module defines the error hierarchy for envport. Every variant is fatal
//! for the whole run: the pipeline stops at the first one and entries that were
//! already published stay published. Per-key skips are not errors.

use super::input::InputSource;
use thiserror::Error;

/// Main envport error type
///
/// The `Display` text of each variant is the user-facing message surfaced to
/// the host when a run aborts.
#[derive(Debug, Error)]
pub enum EnvportError {
    /// The `secrets` or `vars` input is not a JSON object
    #[error(
        "Cannot parse JSON {source_name}. \nMake sure you add the following to this action:\nwith:\n  {source_name}: ${{{{ toJSON({source_name}) }}}}"
    )]
    InputParse {
        /// Input name (`secrets` or `vars`)
        source_name: &'static str,
    },

    /// Transform name outside the closed set of case transforms
    #[error("Unknown transform value \"{value}\". Accepted values are: {accepted}")]
    UnknownTransform { value: String, accepted: String },

    /// Unknown convert kind, or a value the converter could not handle
    #[error("Cannot convert value with type \"{value}\". Accepted values are: {accepted}")]
    Conversion { value: String, accepted: String },

    /// An `only`/`except` pattern that is not a valid regular expression
    #[error("Invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The environment refused a publication
    #[error("Failed to export variable: {0}")]
    Publish(String),
}

impl EnvportError {
    /// Input parse error for the given source map
    pub fn input_parse(source: InputSource) -> Self {
        EnvportError::InputParse {
            source_name: source.input_name(),
        }
    }

    /// Unknown transform error listing every accepted transform
    pub fn unknown_transform(value: impl Into<String>) -> Self {
        EnvportError::UnknownTransform {
            value: value.into(),
            accepted: crate::core::transform::CaseTransform::accepted_values(),
        }
    }

    /// Conversion error listing every accepted convert kind
    pub fn conversion(value: impl Into<String>) -> Self {
        EnvportError::Conversion {
            value: value.into(),
            accepted: crate::core::convert::ValueConversion::accepted_values(),
        }
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for EnvportError {
    fn from(err: toml::de::Error) -> Self {
        EnvportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = EnvportError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_input_parse_message() {
        let err = EnvportError::input_parse(InputSource::Secret);
        assert_eq!(
            err.to_string(),
            "Cannot parse JSON secrets. \nMake sure you add the following to this action:\nwith:\n  secrets: ${{ toJSON(secrets) }}"
        );

        let err = EnvportError::input_parse(InputSource::Var);
        assert!(err.to_string().contains("vars: ${{ toJSON(vars) }}"));
    }

    #[test]
    fn test_unknown_transform_message() {
        let err = EnvportError::unknown_transform("kebab");
        assert_eq!(
            err.to_string(),
            "Unknown transform value \"kebab\". Accepted values are: lowercase, uppercase, camelcase, constant, pascalcase, snakecase"
        );
    }

    #[test]
    fn test_conversion_message() {
        let err = EnvportError::conversion("hex");
        assert_eq!(
            err.to_string(),
            "Cannot convert value with type \"hex\". Accepted values are: base64, utf8"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: EnvportError = toml_err.into();
        assert!(matches!(err, EnvportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_envport_error_implements_std_error() {
        let err = EnvportError::Publish("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
