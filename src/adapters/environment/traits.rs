//! Environment abstraction traits
//!
//! This module defines the trait the export pipeline publishes through.

use crate::domain::Result;

/// Process-wide key/value environment
///
/// The pipeline reads it to detect name collisions and writes every accepted
/// entry through [`Environment::publish`].
pub trait Environment {
    /// Current value of `key`, if set
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is already set to a non-empty value
    ///
    /// An empty value counts as unset.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    /// Sets `key` to `value` for the rest of the job
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be handed to the runner.
    fn publish(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Whether `key` can name a process environment variable
///
/// Names must be non-empty and free of `=` and NUL.
pub fn is_valid_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}
