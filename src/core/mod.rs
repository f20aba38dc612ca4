//! Core business logic for envport.
//!
//! # Modules
//!
//! - [`choice`] - Transform and convert names resolved on first use
//! - [`filter`] - `only`/`except` key selection
//! - [`transform`] - Key renaming (prefix, suffix, case transform)
//! - [`convert`] - Value conversion (base64, utf8)
//! - [`export`] - Export options, pipeline and summary
//!
//! # Export Workflow
//!
//! Every entry of the secrets map, then every entry of the vars map, goes
//! through the same stages:
//!
//! 1. **Only**: drop keys matching none of the `only` patterns
//! 2. **Except**: drop keys matching an `except` pattern (or `github_token`)
//! 3. **Rename**: apply prefix, suffix and case transform
//! 4. **Collision**: skip keys already set, unless override is enabled
//! 5. **Convert**: encode or decode the value
//! 6. **Publish**: write the variable into the environment
//!
//! # Example
//!
//! ```rust
//! use envport::adapters::environment::InMemoryEnvironment;
//! use envport::config::ExportSettings;
//! use envport::core::export::{ExportOptions, ExportPipeline};
//! use envport::domain::{InputMap, InputSource};
//!
//! # fn example() -> envport::domain::Result<()> {
//! let settings = ExportSettings {
//!     transform: Some("camelcase".to_string()),
//!     ..Default::default()
//! };
//! let pipeline = ExportPipeline::new(ExportOptions::from_settings(&settings));
//!
//! let secrets = InputMap::from_json(InputSource::Secret, r#"{"MY_SECRET_1":"VALUE_1"}"#)?;
//! let vars = InputMap::empty(InputSource::Var);
//! let mut env = InMemoryEnvironment::new();
//!
//! let summary = pipeline.run(&secrets, &vars, &mut env)?;
//! assert_eq!(summary.exported_keys(), vec!["mySecret_1"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod choice;
pub mod convert;
pub mod export;
pub mod filter;
pub mod transform;
