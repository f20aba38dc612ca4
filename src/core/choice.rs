//! Named choices from a closed set
//!
//! A transform or convert name is parsed when options are built, but an
//! unknown name only becomes an error once an entry actually needs it. A run
//! that filters out every key therefore succeeds whatever the name.

use crate::domain::{EnvportError, Result};
use std::str::FromStr;

/// A user-supplied name, resolved against a closed set on first use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    /// Nothing was configured
    Unset,
    /// The name matched a known value
    Known(T),
    /// The name matched nothing; kept verbatim for the error message
    Unknown(String),
}

impl<T> Choice<T>
where
    T: FromStr<Err = EnvportError> + Copy,
{
    /// Parses an optional name; blank names count as unset
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            None => Choice::Unset,
            Some(name) => match name.parse() {
                Ok(value) => Choice::Known(value),
                Err(_) => Choice::Unknown(name.to_string()),
            },
        }
    }

    /// Value to apply, if any
    ///
    /// # Errors
    ///
    /// Returns the parse error of `T` for an unknown name.
    pub fn resolve(&self) -> Result<Option<T>> {
        match self {
            Choice::Unset => Ok(None),
            Choice::Known(value) => Ok(Some(*value)),
            Choice::Unknown(name) => name.parse().map(Some),
        }
    }

    /// The known value, ignoring unknown names
    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(value) => Some(*value),
            _ => None,
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Unset
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Choice::Unset, Choice::Known)
    }
}
