//! Key transformation logic
//!
//! This module turns an input key into the name it is exported under:
//!
//! - [`CaseTransform`] - the closed set of case conventions
//! - [`words`] - word splitting shared by the word-based conventions
//! - [`rename`] - prefix/suffix placement around the case transform

pub mod rename;
pub mod words;

pub use rename::KeyRenamer;

use crate::domain::{EnvportError, Result};
use std::fmt;
use std::str::FromStr;
use words::{capitalize, split_words};

/// Case convention applied to an exported key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// Lower-case every character
    Lowercase,
    /// Upper-case every character
    Uppercase,
    /// `mySecretKey`
    Camelcase,
    /// `MY_SECRET_KEY`
    Constant,
    /// `MySecretKey`
    Pascalcase,
    /// `my_secret_key`
    Snakecase,
}

impl CaseTransform {
    /// Every transform, in the order they are listed to users
    pub const ALL: [CaseTransform; 6] = [
        CaseTransform::Lowercase,
        CaseTransform::Uppercase,
        CaseTransform::Camelcase,
        CaseTransform::Constant,
        CaseTransform::Pascalcase,
        CaseTransform::Snakecase,
    ];

    /// Input name of this transform
    pub fn name(self) -> &'static str {
        match self {
            CaseTransform::Lowercase => "lowercase",
            CaseTransform::Uppercase => "uppercase",
            CaseTransform::Camelcase => "camelcase",
            CaseTransform::Constant => "constant",
            CaseTransform::Pascalcase => "pascalcase",
            CaseTransform::Snakecase => "snakecase",
        }
    }

    /// Comma-separated list of accepted names
    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies the transform to a whole key
    ///
    /// # Examples
    ///
    /// ```
    /// use envport::core::transform::CaseTransform;
    ///
    /// assert_eq!(CaseTransform::Camelcase.apply("MY_SECRET_1"), "mySecret_1");
    /// assert_eq!(CaseTransform::Snakecase.apply("PREFIX_MY_SECRET"), "prefix_my_secret");
    /// ```
    pub fn apply(self, input: &str) -> String {
        match self {
            CaseTransform::Lowercase => input.to_lowercase(),
            CaseTransform::Uppercase => input.to_uppercase(),
            CaseTransform::Camelcase => split_words(input)
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        word.to_lowercase()
                    } else {
                        capitalize(word, i)
                    }
                })
                .collect(),
            CaseTransform::Pascalcase => split_words(input)
                .iter()
                .enumerate()
                .map(|(i, word)| capitalize(word, i))
                .collect(),
            CaseTransform::Snakecase => join_words(input, "_", str::to_lowercase),
            CaseTransform::Constant => join_words(input, "_", str::to_uppercase),
        }
    }
}

fn join_words(input: &str, delimiter: &str, case: fn(&str) -> String) -> String {
    split_words(input)
        .iter()
        .map(|word| case(word))
        .collect::<Vec<_>>()
        .join(delimiter)
}

impl FromStr for CaseTransform {
    type Err = EnvportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| EnvportError::unknown_transform(s))
    }
}

impl fmt::Display for CaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
