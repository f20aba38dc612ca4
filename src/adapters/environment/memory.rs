//! In-memory environment
//!
//! Used by tests and by dry runs. Entries keep their insertion order so
//! published variables can be listed in the order they were exported.

use super::traits::Environment;
use crate::domain::Result;

/// Ordered in-memory key/value environment
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    vars: Vec<(String, String)>,
    published: Vec<String>,
}

impl InMemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment pre-populated with the given pairs
    pub fn with_vars<K, V, I>(vars: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            env.set(key.into(), value.into());
        }
        env
    }

    /// Snapshot of the current process environment
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self::with_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Keys passed to `publish`, in call order (repeats included)
    pub fn published(&self) -> &[String] {
        &self.published
    }

    /// All current entries in insertion order
    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    fn set(&mut self, key: String, value: String) {
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }
}

impl Environment for InMemoryEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn publish(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key.to_string(), value.to_string());
        self.published.push(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_get() {
        let mut env = InMemoryEnvironment::new();
        assert_eq!(env.get("KEY"), None);

        env.publish("KEY", "value").unwrap();
        assert_eq!(env.get("KEY"), Some("value".to_string()));
        assert_eq!(env.published(), ["KEY".to_string()]);
    }

    #[test]
    fn test_publish_overwrites_in_place() {
        let mut env = InMemoryEnvironment::with_vars([("A", "1"), ("B", "2")]);
        env.publish("A", "3").unwrap();

        assert_eq!(
            env.vars(),
            [
                ("A".to_string(), "3".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_contains_ignores_empty_values() {
        let env = InMemoryEnvironment::with_vars([("SET", "x"), ("EMPTY", "")]);
        assert!(env.contains("SET"));
        assert!(!env.contains("EMPTY"));
        assert!(!env.contains("MISSING"));
    }

    #[test]
    fn test_from_process_snapshot() {
        std::env::set_var("ENVPORT_MEMORY_SNAPSHOT_TEST", "present");
        let env = InMemoryEnvironment::from_process();
        assert_eq!(
            env.get("ENVPORT_MEMORY_SNAPSHOT_TEST"),
            Some("present".to_string())
        );
        std::env::remove_var("ENVPORT_MEMORY_SNAPSHOT_TEST");
    }
}
