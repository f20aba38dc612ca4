//! Word splitting for the word-based case transforms
//!
//! A key is split into words at:
//! - a lower-case letter or digit followed by an upper-case letter (`myKey`)
//! - an upper-case letter followed by an upper-case + lower-case pair (`HTTPServer`)
//! - every run of characters outside `[A-Za-z0-9]` (`MY_KEY`, `my-key`, `my.key`)
//!
//! Separators are dropped, so non-ASCII letters never survive a word-based
//! transform.

use regex::Regex;
use std::sync::LazyLock;

const BOUNDARY: &str = "\u{0}";

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("lower/upper pattern is valid"));

static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("acronym pattern is valid"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"));

/// Splits `input` into its words, in order
///
/// # Examples
///
/// ```
/// use envport::core::transform::words::split_words;
///
/// assert_eq!(split_words("MY_SECRET_1"), vec!["MY", "SECRET", "1"]);
/// assert_eq!(split_words("parseHTTPResponse"), vec!["parse", "HTTP", "Response"]);
/// ```
pub fn split_words(input: &str) -> Vec<String> {
    let marked = LOWER_UPPER.replace_all(input, "${1}\u{0}${2}");
    let marked = UPPER_WORD.replace_all(&marked, "${1}\u{0}${2}");
    let marked = SEPARATORS.replace_all(&marked, BOUNDARY);

    marked
        .split(BOUNDARY)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-cases the first character and lower-cases the rest
///
/// A word that is not the first word and starts with a digit gets a leading
/// `_` so it stays readable once the words are joined without separators.
pub(crate) fn capitalize(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();

    if index > 0 && first.is_ascii_digit() {
        format!("_{first}{rest}")
    } else {
        format!("{}{rest}", first.to_uppercase())
    }
}
