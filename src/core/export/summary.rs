//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::InputSource;
use std::time::Duration;

/// A key that was published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedKey {
    /// Name the value was exported under
    pub key: String,

    /// Map the entry came from
    pub source: InputSource,

    /// Whether an existing non-empty variable was replaced
    pub overwritten: bool,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Published keys, in publication order
    pub exported: Vec<ExportedKey>,

    /// Entries rejected by the `only`/`except` filters
    pub filtered: usize,

    /// Final keys skipped because they already existed and override is off
    pub kept_existing: Vec<String>,

    /// Final keys skipped because they are not valid variable names
    pub invalid_names: Vec<String>,

    /// Duration of the run
    pub duration: Duration,

    /// Whether the run published into a throwaway environment
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            exported: Vec::new(),
            filtered: 0,
            kept_existing: Vec::new(),
            invalid_names: Vec::new(),
            duration: Duration::from_secs(0),
            dry_run: false,
        }
    }

    pub(crate) fn record_exported(&mut self, exported: ExportedKey) {
        self.exported.push(exported);
    }

    pub(crate) fn record_filtered(&mut self) {
        self.filtered += 1;
    }

    pub(crate) fn record_kept_existing(&mut self, key: String) {
        self.kept_existing.push(key);
    }

    pub(crate) fn record_invalid_name(&mut self, key: String) {
        self.invalid_names.push(key);
    }

    /// Number of entries looked at across both maps
    pub fn total_entries(&self) -> usize {
        self.exported.len() + self.filtered + self.kept_existing.len() + self.invalid_names.len()
    }

    /// Number of published entries that replaced an existing variable
    pub fn overwritten_count(&self) -> usize {
        self.exported.iter().filter(|e| e.overwritten).count()
    }

    /// Number of published entries from the given source
    pub fn exported_from(&self, source: InputSource) -> usize {
        self.exported.iter().filter(|e| e.source == source).count()
    }

    /// Exported key names, in publication order
    pub fn exported_keys(&self) -> Vec<&str> {
        self.exported.iter().map(|e| e.key.as_str()).collect()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total_entries(),
            exported = self.exported.len(),
            secrets = self.exported_from(InputSource::Secret),
            vars = self.exported_from(InputSource::Var),
            overwritten = self.overwritten_count(),
            filtered = self.filtered,
            kept_existing = self.kept_existing.len(),
            invalid_names = self.invalid_names.len(),
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
