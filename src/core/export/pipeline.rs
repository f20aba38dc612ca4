//! Export pipeline
//!
//! Runs every entry of the secrets map, then every entry of the vars map,
//! through the same stages: only-filter, except-filter, renaming, collision
//! check, value conversion and publication. The first error aborts the run;
//! entries published before it stay published.
//!
//! A key that renames to something no environment can hold (empty, or with
//! `=` or NUL in it) is skipped with a warning.

use super::summary::{ExportSummary, ExportedKey};
use super::ExportOptions;
use crate::adapters::environment::{is_valid_name, Environment};
use crate::config::secret_string;
use crate::core::filter::Admission;
use crate::domain::{InputMap, Result};
use secrecy::ExposeSecret;
use std::time::Instant;

/// Export pipeline bound to one set of options
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    options: ExportOptions,
}

impl ExportPipeline {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Exports `secrets` then `vars` into `env`
    ///
    /// # Errors
    ///
    /// Returns the first filter, rename, conversion or publication error.
    /// Nothing is rolled back.
    pub fn run<E>(&self, secrets: &InputMap, vars: &InputMap, env: &mut E) -> Result<ExportSummary>
    where
        E: Environment + ?Sized,
    {
        let started = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::debug!(
            secrets = secrets.len(),
            vars = vars.len(),
            "Starting export"
        );

        self.export_map(secrets, env, &mut summary)?;
        self.export_map(vars, env, &mut summary)?;

        summary.duration = started.elapsed();
        summary.log_summary();
        Ok(summary)
    }

    fn export_map<E>(&self, map: &InputMap, env: &mut E, summary: &mut ExportSummary) -> Result<()>
    where
        E: Environment + ?Sized,
    {
        let source = map.source();

        for entry in map.entries() {
            let admission = self.options.filter.admit(&entry.key)?;
            if admission != Admission::Accepted {
                tracing::debug!(key = %entry.key, %source, ?admission, "Key filtered out");
                summary.record_filtered();
                continue;
            }

            let new_key = self.options.renamer.rename(&entry.key)?;
            if !is_valid_name(&new_key) {
                tracing::warn!(
                    key = %entry.key,
                    %source,
                    "Skip invalid environment variable name \"{new_key}\""
                );
                summary.record_invalid_name(new_key);
                continue;
            }

            let overwritten = env.contains(&new_key);
            if overwritten {
                if self.options.override_existing {
                    tracing::warn!(key = %new_key, "Will re-write \"{new_key}\" environment variable.");
                } else {
                    tracing::info!(key = %new_key, "Skip overwriting var {new_key}");
                    summary.record_kept_existing(new_key);
                    continue;
                }
            }

            let value = entry.value.expose_secret().as_str();
            let new_value = match self.options.conversion.resolve()? {
                Some(conversion) => secret_string(conversion.apply(value)?),
                None => entry.value.clone(),
            };

            env.publish(&new_key, new_value.expose_secret().as_str())?;
            tracing::info!(key = %new_key, %source, "Exported {source} {new_key}");

            summary.record_exported(ExportedKey {
                key: new_key,
                source,
                overwritten,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::environment::InMemoryEnvironment;
    use crate::config::ExportSettings;
    use crate::domain::{EnvportError, InputSource};

    fn secrets() -> InputMap {
        InputMap::from_pairs(
            InputSource::Secret,
            [
                ("MY_SECRET_1", "VALUE_1"),
                ("MY_SECRET_2", "VALUE_2"),
                ("my_low_secret_1", "low_value_1"),
            ],
        )
    }

    fn pipeline(settings: ExportSettings) -> ExportPipeline {
        ExportPipeline::new(ExportOptions::from_settings(&settings))
    }

    #[test]
    fn test_exports_everything_by_default() {
        let mut env = InMemoryEnvironment::new();
        let summary = pipeline(ExportSettings::default())
            .run(&secrets(), &InputMap::empty(InputSource::Var), &mut env)
            .unwrap();

        assert_eq!(
            summary.exported_keys(),
            vec!["MY_SECRET_1", "MY_SECRET_2", "my_low_secret_1"]
        );
        assert_eq!(env.get("MY_SECRET_2"), Some("VALUE_2".to_string()));
    }

    #[test]
    fn test_secrets_before_vars_and_later_wins() {
        let vars = InputMap::from_pairs(InputSource::Var, [("MY_SECRET_1", "from_var")]);
        let mut env = InMemoryEnvironment::new();

        let summary = pipeline(ExportSettings::default())
            .run(&secrets(), &vars, &mut env)
            .unwrap();

        assert_eq!(env.get("MY_SECRET_1"), Some("from_var".to_string()));
        let last = summary.exported.last().unwrap();
        assert_eq!(last.source, InputSource::Var);
        assert!(last.overwritten);
    }

    #[test]
    fn test_no_override_keeps_existing_value() {
        let mut env = InMemoryEnvironment::with_vars([("MY_SECRET_1", "DONT_OVERRIDE")]);
        let settings = ExportSettings {
            override_existing: false,
            ..Default::default()
        };

        let summary = pipeline(settings)
            .run(&secrets(), &InputMap::empty(InputSource::Var), &mut env)
            .unwrap();

        assert_eq!(env.get("MY_SECRET_1"), Some("DONT_OVERRIDE".to_string()));
        assert!(!env.published().contains(&"MY_SECRET_1".to_string()));
        assert_eq!(summary.kept_existing, vec!["MY_SECRET_1".to_string()]);
    }

    #[test]
    fn test_conversion_error_stops_run_after_earlier_exports() {
        let map = InputMap::from_pairs(
            InputSource::Secret,
            [("GOOD", "VkFMVUVfMQ=="), ("BAD", "%%%"), ("NEVER", "VkFMVUVfMg==")],
        );
        let settings = ExportSettings {
            convert: Some("utf8".to_string()),
            ..Default::default()
        };
        let mut env = InMemoryEnvironment::new();

        let err = pipeline(settings)
            .run(&map, &InputMap::empty(InputSource::Var), &mut env)
            .unwrap_err();

        assert!(matches!(err, EnvportError::Conversion { .. }));
        assert_eq!(env.get("GOOD"), Some("VALUE_1".to_string()));
        assert_eq!(env.get("NEVER"), None);
    }

    #[test]
    fn test_invalid_names_are_skipped() {
        let map = InputMap::from_pairs(
            InputSource::Secret,
            [("___", "a"), ("", "b"), ("OK_KEY", "c")],
        );
        let settings = ExportSettings {
            transform: Some("snakecase".to_string()),
            ..Default::default()
        };
        let mut env = InMemoryEnvironment::new();

        let summary = pipeline(settings)
            .run(&map, &InputMap::empty(InputSource::Var), &mut env)
            .unwrap();

        assert_eq!(summary.exported_keys(), vec!["ok_key"]);
        assert_eq!(summary.invalid_names, vec![String::new(), String::new()]);
        assert_eq!(env.published(), &["ok_key".to_string()]);
    }

    #[test]
    fn test_unknown_transform_fails_once_a_key_is_admitted() {
        let settings = ExportSettings {
            only: Some(vec!["^B$".to_string()]),
            transform: Some("kebab".to_string()),
            ..Default::default()
        };
        let map = InputMap::from_pairs(InputSource::Secret, [("A", "1"), ("B", "2")]);
        let mut env = InMemoryEnvironment::new();

        let err = pipeline(settings)
            .run(&map, &InputMap::empty(InputSource::Var), &mut env)
            .unwrap_err();

        assert!(matches!(err, EnvportError::UnknownTransform { .. }));
        assert!(env.published().is_empty());
    }

    #[test]
    fn test_unknown_convert_fails_after_collision_check() {
        let settings = ExportSettings {
            convert: Some("hex".to_string()),
            override_existing: false,
            ..Default::default()
        };
        let map = InputMap::from_pairs(InputSource::Secret, [("TAKEN", "1"), ("FREE", "2")]);
        let mut env = InMemoryEnvironment::with_vars([("TAKEN", "x")]);

        let err = pipeline(settings)
            .run(&map, &InputMap::empty(InputSource::Var), &mut env)
            .unwrap_err();

        assert!(matches!(err, EnvportError::Conversion { .. }));
        assert_eq!(env.get("TAKEN"), Some("x".to_string()));
        assert_eq!(env.get("FREE"), None);
    }
}
