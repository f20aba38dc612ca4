//! Export orchestration
//!
//! This module turns [`ExportSettings`] into [`ExportOptions`] and runs both
//! input maps through the [`ExportPipeline`].
//!
//! Building options never fails. An unknown transform or convert name, or a
//! pattern that does not compile, is reported when an entry first needs it.
//! [`ExportOptions::validate`] reports the same problems up front.

pub mod pipeline;
pub mod summary;

pub use pipeline::ExportPipeline;
pub use summary::{ExportSummary, ExportedKey};

use crate::adapters::environment::Environment;
use crate::config::ExportSettings;
use crate::core::choice::Choice;
use crate::core::convert::ValueConversion;
use crate::core::filter::KeyFilter;
use crate::core::transform::{CaseTransform, KeyRenamer};
use crate::domain::{InputMap, Result};

/// Options for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Compiled `only`/`except` patterns
    pub filter: KeyFilter,

    /// Prefix, suffix and case transform for keys
    pub renamer: KeyRenamer,

    /// Replace variables that already hold a non-empty value
    pub override_existing: bool,

    /// Conversion applied to every exported value
    pub conversion: Choice<ValueConversion>,
}

impl ExportOptions {
    /// Builds options from raw settings
    ///
    /// Blank `transform`/`convert` values count as unset.
    pub fn from_settings(settings: &ExportSettings) -> Self {
        let renamer = KeyRenamer::identity()
            .with_prefix(settings.prefix.as_str(), settings.transform_prefix)
            .with_suffix(settings.suffix.as_str(), settings.transform_suffix)
            .with_transform(Choice::<CaseTransform>::parse(settings.transform.as_deref()));

        Self {
            filter: KeyFilter::new(settings.only.as_deref(), &settings.except),
            renamer,
            override_existing: settings.override_existing,
            conversion: Choice::parse(settings.convert.as_deref()),
        }
    }

    /// Checks every setting without processing any entry
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::UnknownTransform`](crate::domain::EnvportError::UnknownTransform),
    /// [`EnvportError::Conversion`](crate::domain::EnvportError::Conversion) or
    /// [`EnvportError::InvalidPattern`](crate::domain::EnvportError::InvalidPattern)
    /// for the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.renamer.transform().resolve()?;
        self.conversion.resolve()?;
        self.filter.check()
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filter: KeyFilter::default(),
            renamer: KeyRenamer::identity(),
            override_existing: true,
            conversion: Choice::Unset,
        }
    }
}

/// Runs a single export with the given options
///
/// # Examples
///
/// ```
/// use envport::adapters::environment::{Environment, InMemoryEnvironment};
/// use envport::core::export::{self, ExportOptions};
/// use envport::domain::{InputMap, InputSource};
///
/// let secrets = InputMap::from_json(InputSource::Secret, r#"{"API_KEY":"abc"}"#).unwrap();
/// let vars = InputMap::empty(InputSource::Var);
/// let mut env = InMemoryEnvironment::new();
///
/// let summary = export::run(&secrets, &vars, ExportOptions::default(), &mut env).unwrap();
/// assert_eq!(summary.exported_keys(), vec!["API_KEY"]);
/// assert_eq!(env.get("API_KEY"), Some("abc".to_string()));
/// ```
pub fn run<E>(secrets: &InputMap, vars: &InputMap, options: ExportOptions, env: &mut E) -> Result<ExportSummary>
where
    E: Environment + ?Sized,
{
    ExportPipeline::new(options).run(secrets, vars, env)
}
