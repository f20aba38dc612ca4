//! External system integrations for envport.
//!
//! - [`environment`] - the environment the pipeline publishes into (trait-based)
//! - [`runner`] - CI runner workflow commands
//!
//! # Design Pattern
//!
//! Adapters isolate the host. The pipeline only sees the
//! [`environment::Environment`] trait, so tests run it against an
//! [`environment::InMemoryEnvironment`]:
//!
//! ```rust
//! use envport::adapters::environment::{Environment, InMemoryEnvironment};
//!
//! let mut env = InMemoryEnvironment::with_vars([("EXISTING", "1")]);
//! env.publish("NEW_KEY", "value").unwrap();
//! assert!(env.contains("EXISTING"));
//! assert_eq!(env.get("NEW_KEY").as_deref(), Some("value"));
//! ```

pub mod environment;
pub mod runner;
