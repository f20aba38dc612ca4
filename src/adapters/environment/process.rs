//! Process environment
//!
//! Publishing sets the variable in the current process and hands it to the
//! runner so later steps of the job see it too:
//!
//! - with `GITHUB_ENV` set, the pair is appended to that file using the
//!   heredoc form `KEY<<DELIMITER\nVALUE\nDELIMITER\n`
//! - otherwise the legacy `::set-env` workflow command is printed

use super::traits::{is_valid_name, Environment};
use crate::adapters::runner::format_command;
use crate::domain::{EnvportError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Name of the variable that points at the runner's env file
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// The real process environment
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    env_file: Option<PathBuf>,
}

impl ProcessEnvironment {
    /// Environment that writes to the file named by `GITHUB_ENV`, if set
    pub fn from_runner() -> Self {
        let env_file = std::env::var_os(GITHUB_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self { env_file }
    }

    /// Environment that appends to an explicit env file
    pub fn with_env_file(path: impl Into<PathBuf>) -> Self {
        Self {
            env_file: Some(path.into()),
        }
    }

    pub fn env_file(&self) -> Option<&PathBuf> {
        self.env_file.as_ref()
    }

    fn append_to_env_file(&self, path: &PathBuf, key: &str, value: &str) -> Result<()> {
        let entry = file_command_entry(key, value, &format!("ghadelimiter_{}", Uuid::new_v4()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                EnvportError::Publish(format!(
                    "cannot open env file {}: {}",
                    path.display(),
                    e
                ))
            })?;
        file.write_all(entry.as_bytes()).map_err(|e| {
            EnvportError::Publish(format!("cannot write env file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn publish(&mut self, key: &str, value: &str) -> Result<()> {
        if !is_valid_name(key) {
            return Err(EnvportError::Publish(format!(
                "\"{key}\" is not a valid environment variable name"
            )));
        }
        if value.contains('\0') {
            return Err(EnvportError::Publish(format!(
                "value of \"{key}\" contains a NUL byte"
            )));
        }

        std::env::set_var(key, value);

        match &self.env_file {
            Some(path) => self.append_to_env_file(path, key, value),
            None => {
                println!("{}", format_command("set-env", &[("name", key)], value));
                Ok(())
            }
        }
    }
}

/// Builds one heredoc entry for the runner's env file
///
/// # Errors
///
/// Returns an error if the key or value contains the delimiter, which would
/// let the value end the entry early.
pub fn file_command_entry(key: &str, value: &str, delimiter: &str) -> Result<String> {
    if key.contains(delimiter) {
        return Err(EnvportError::Publish(format!(
            "name \"{key}\" must not contain the delimiter \"{delimiter}\""
        )));
    }
    if value.contains(delimiter) {
        return Err(EnvportError::Publish(format!(
            "value of \"{key}\" must not contain the delimiter \"{delimiter}\""
        )));
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_command_entry() {
        let entry = file_command_entry("KEY", "line1\nline2", "EOF_1").unwrap();
        assert_eq!(entry, "KEY<<EOF_1\nline1\nline2\nEOF_1\n");
    }

    #[test]
    fn test_file_command_entry_rejects_delimiter() {
        assert!(file_command_entry("KEY", "x EOF_1 y", "EOF_1").is_err());
        assert!(file_command_entry("EOF_1", "x", "EOF_1").is_err());
    }

    #[test]
    fn test_publish_appends_to_env_file() {
        let file = NamedTempFile::new().unwrap();
        let mut env = ProcessEnvironment::with_env_file(file.path());

        env.publish("ENVPORT_PROCESS_TEST_A", "first").unwrap();
        env.publish("ENVPORT_PROCESS_TEST_B", "second\nline").unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("ENVPORT_PROCESS_TEST_A<<ghadelimiter_"));
        assert_eq!(lines[1], "first");
        assert!(lines[3].starts_with("ENVPORT_PROCESS_TEST_B<<ghadelimiter_"));
        assert_eq!(lines[4], "second");
        assert_eq!(lines[5], "line");

        assert_eq!(
            env.get("ENVPORT_PROCESS_TEST_A"),
            Some("first".to_string())
        );
        std::env::remove_var("ENVPORT_PROCESS_TEST_A");
        std::env::remove_var("ENVPORT_PROCESS_TEST_B");
    }

    #[test]
    fn test_publish_rejects_invalid_name() {
        let file = NamedTempFile::new().unwrap();
        let mut env = ProcessEnvironment::with_env_file(file.path());

        assert!(env.publish("", "value").is_err());
        assert!(env.publish("A=B", "value").is_err());
    }
}
