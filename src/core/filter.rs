//! Key selection
//!
//! `only` and `except` patterns are unanchored, case-sensitive regular
//! expressions matched against the original key. They support lookaround, so
//! `^(?!MY_)` in `except` keeps only keys starting with `MY_`.
//!
//! Patterns are compiled once when the filter is built. A pattern that does
//! not compile is kept and reported as [`EnvportError::InvalidPattern`] the
//! first time a key is checked against it.

use crate::domain::{EnvportError, Result};
use fancy_regex::Regex;

/// Pattern that is always excluded, whatever the user configures
pub const ALWAYS_EXCEPT: &str = "github_token";

/// Outcome of checking a key against the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Key may be exported
    Accepted,
    /// `only` is set and no pattern matched
    NotSelected,
    /// An `except` pattern matched
    Excluded,
}

#[derive(Debug, Clone)]
enum Pattern {
    Compiled(Regex),
    Invalid { pattern: String, reason: String },
}

impl Pattern {
    fn compile(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Pattern::Compiled(re),
            Err(e) => Pattern::Invalid {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            },
        }
    }

    fn is_match(&self, key: &str) -> Result<bool> {
        match self {
            Pattern::Compiled(re) => re.is_match(key).map_err(|e| EnvportError::InvalidPattern {
                pattern: re.as_str().to_string(),
                reason: e.to_string(),
            }),
            Pattern::Invalid { pattern, reason } => Err(EnvportError::InvalidPattern {
                pattern: pattern.clone(),
                reason: reason.clone(),
            }),
        }
    }

    fn check(&self) -> Result<()> {
        match self {
            Pattern::Compiled(_) => Ok(()),
            Pattern::Invalid { .. } => self.is_match("").map(|_| ()),
        }
    }
}

/// Compiled `only`/`except` patterns
#[derive(Debug, Clone)]
pub struct KeyFilter {
    only: Option<Vec<Pattern>>,
    except: Vec<Pattern>,
}

impl KeyFilter {
    /// Compiles the filter
    ///
    /// `except` is extended with [`ALWAYS_EXCEPT`].
    pub fn new<S: AsRef<str>>(only: Option<&[S]>, except: &[S]) -> Self {
        let only = only.map(compile_all);

        let mut compiled_except = vec![Pattern::compile(ALWAYS_EXCEPT)];
        compiled_except.extend(compile_all(except));

        Self {
            only,
            except: compiled_except,
        }
    }

    /// Checks `key` against `only` first, then `except`
    ///
    /// Patterns are tried in order and evaluation stops at the first match.
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::InvalidPattern`] when a pattern that had to be
    /// evaluated is not a valid regular expression.
    pub fn admit(&self, key: &str) -> Result<Admission> {
        if let Some(only) = &self.only {
            if !any_match(only, key)? {
                return Ok(Admission::NotSelected);
            }
        }

        if any_match(&self.except, key)? {
            return Ok(Admission::Excluded);
        }

        Ok(Admission::Accepted)
    }

    /// Reports the first pattern that does not compile
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::InvalidPattern`] naming that pattern.
    pub fn check(&self) -> Result<()> {
        self.only
            .iter()
            .flatten()
            .chain(&self.except)
            .try_for_each(Pattern::check)
    }

    /// Number of `only` patterns, if the `only` filter is set
    pub fn only_count(&self) -> Option<usize> {
        self.only.as_ref().map(Vec::len)
    }

    /// Number of `except` patterns, including the built-in one
    pub fn except_count(&self) -> usize {
        self.except.len()
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self::new::<&str>(None, &[])
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Vec<Pattern> {
    patterns.iter().map(|p| Pattern::compile(p.as_ref())).collect()
}

fn any_match(patterns: &[Pattern], key: &str) -> Result<bool> {
    for pattern in patterns {
        if pattern.is_match(key)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Splits a comma-separated pattern list, trimming each pattern
///
/// # Examples
///
/// ```
/// use envport::core::filter::split_patterns;
///
/// assert_eq!(split_patterns("MY_SECRET_1, MY_SECRET_2"), vec!["MY_SECRET_1", "MY_SECRET_2"]);
/// ```
pub fn split_patterns(list: &str) -> Vec<String> {
    list.split(',').map(|p| p.trim().to_string()).collect()
}
