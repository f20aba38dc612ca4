//! Configuration management for envport.
//!
//! Settings are layered:
//! 1. Built-in defaults
//! 2. An optional TOML file, with `${VAR_NAME}` substitution and
//!    `ENVPORT_<SECTION>_<KEY>` environment overrides
//! 3. CLI flags and `INPUT_*` action inputs (applied by the `export` command)
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! only = ["^APP_", "^DEPLOY_"]
//! except = ["_INTERNAL$"]
//! prefix = "CI_"
//! transform = "snakecase"
//! transform_prefix = false
//! override = true
//! convert = "base64"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use envport::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("envport.toml")?;
//! println!("Prefix: {}", config.export.prefix);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, EnvportConfig, ExportSettings, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
