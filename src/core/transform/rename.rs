//! Key renaming
//!
//! Prefix and suffix are placed either before the case transform, so they are
//! rewritten along with the key, or after it, so they stay literal.

use super::CaseTransform;
use crate::core::choice::Choice;
use crate::domain::Result;

/// Pure function from an input key to its exported name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRenamer {
    prefix: String,
    suffix: String,
    transform: Choice<CaseTransform>,
    transform_prefix: bool,
    transform_suffix: bool,
}

impl KeyRenamer {
    /// Renamer that leaves keys untouched
    pub fn identity() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            transform: Choice::Unset,
            transform_prefix: true,
            transform_suffix: true,
        }
    }

    /// Sets the prefix and whether it takes part in the case transform
    pub fn with_prefix(mut self, prefix: impl Into<String>, transformed: bool) -> Self {
        self.prefix = prefix.into();
        self.transform_prefix = transformed;
        self
    }

    /// Sets the suffix and whether it takes part in the case transform
    pub fn with_suffix(mut self, suffix: impl Into<String>, transformed: bool) -> Self {
        self.suffix = suffix.into();
        self.transform_suffix = transformed;
        self
    }

    /// Sets the case transform
    ///
    /// An unknown name is accepted here and reported by [`rename`](Self::rename).
    pub fn with_transform(mut self, transform: impl Into<Choice<CaseTransform>>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn transform(&self) -> &Choice<CaseTransform> {
        &self.transform
    }

    /// Computes the exported name of `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use envport::core::transform::{CaseTransform, KeyRenamer};
    ///
    /// let renamer = KeyRenamer::identity()
    ///     .with_prefix("PREFIX_", false)
    ///     .with_transform(Some(CaseTransform::Snakecase));
    /// assert_eq!(renamer.rename("MY_SECRET_1").unwrap(), "PREFIX_my_secret_1");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::UnknownTransform`](crate::domain::EnvportError::UnknownTransform)
    /// when the configured transform name is not recognised.
    pub fn rename(&self, key: &str) -> Result<String> {
        let transform = self.transform.resolve()?;
        let mut new_key = key.to_string();

        if !self.prefix.is_empty() && self.transform_prefix {
            new_key.insert_str(0, &self.prefix);
        }
        if !self.suffix.is_empty() && self.transform_suffix {
            new_key.push_str(&self.suffix);
        }

        if let Some(transform) = transform {
            new_key = transform.apply(&new_key);
        }

        if !self.prefix.is_empty() && !self.transform_prefix {
            new_key.insert_str(0, &self.prefix);
        }
        if !self.suffix.is_empty() && !self.transform_suffix {
            new_key.push_str(&self.suffix);
        }

        Ok(new_key)
    }
}

impl Default for KeyRenamer {
    fn default() -> Self {
        Self::identity()
    }
}
