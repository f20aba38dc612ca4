//! Input maps handed to the export pipeline
//!
//! The runner passes secrets and variables as JSON objects. Each becomes an
//! [`InputMap`] that keeps the object's key order and holds every value as a
//! [`SecretString`] so it can't leak through `Debug` output.

use super::errors::EnvportError;
use super::result::Result;
use crate::config::{secret_string, SecretString};
use serde_json::Value;
use std::fmt;

/// Which input namespace an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// The `secrets` input
    Secret,
    /// The `vars` input
    Var,
}

impl InputSource {
    /// Name of the action input this source is read from
    pub fn input_name(self) -> &'static str {
        match self {
            InputSource::Secret => "secrets",
            InputSource::Var => "vars",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Secret => write!(f, "secret"),
            InputSource::Var => write!(f, "var"),
        }
    }
}

/// A single key/value pair from an input map
#[derive(Debug, Clone)]
pub struct InputEntry {
    /// Original key, before any renaming
    pub key: String,

    /// Original value
    pub value: SecretString,
}

/// Ordered key/value mapping tagged with its source
#[derive(Debug, Clone)]
pub struct InputMap {
    source: InputSource,
    entries: Vec<InputEntry>,
}

impl InputMap {
    /// Creates an empty map
    pub fn empty(source: InputSource) -> Self {
        Self {
            source,
            entries: Vec::new(),
        }
    }

    /// Parses the JSON text of a `secrets`/`vars` input
    ///
    /// Empty or whitespace-only text means "not provided" and yields an empty
    /// map. Anything else must be a JSON object. String values are taken as-is,
    /// `null` becomes the empty string and other values are exported as their
    /// compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::InputParse`] if the text is not a JSON object.
    pub fn from_json(source: InputSource, json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::empty(source));
        }

        let parsed: Value =
            serde_json::from_str(json).map_err(|_| EnvportError::input_parse(source))?;
        let Value::Object(object) = parsed else {
            return Err(EnvportError::input_parse(source));
        };

        let entries = object
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                InputEntry {
                    key,
                    value: secret_string(text),
                }
            })
            .collect();

        Ok(Self { source, entries })
    }

    /// Builds a map from plain pairs, keeping their order
    pub fn from_pairs<K, V, I>(source: InputSource, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| InputEntry {
                key: k.into(),
                value: secret_string(v.into()),
            })
            .collect();
        Self { source, entries }
    }

    /// Source tag of this map
    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Entries in iteration order
    pub fn entries(&self) -> &[InputEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
