//! Value conversion
//!
//! Conversions apply to the value only and never look at the key.

use crate::domain::{EnvportError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use std::fmt;
use std::str::FromStr;

/// Decoders accept input with or without padding
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Encoding or decoding applied to an exported value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConversion {
    /// Encode the value's UTF-8 bytes as padded standard base64
    Base64,
    /// Decode the value as base64 and render the bytes as UTF-8 text
    Utf8,
}

impl ValueConversion {
    /// Every conversion, in the order they are listed to users
    pub const ALL: [ValueConversion; 2] = [ValueConversion::Base64, ValueConversion::Utf8];

    /// Input name of this conversion
    pub fn name(self) -> &'static str {
        match self {
            ValueConversion::Base64 => "base64",
            ValueConversion::Utf8 => "utf8",
        }
    }

    /// Comma-separated list of accepted names
    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Converts a value
    ///
    /// `Utf8` accepts the standard and URL-safe alphabets, with or without
    /// padding, and ignores ASCII whitespace. Decoded bytes that are not valid
    /// UTF-8 are rendered with replacement characters rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EnvportError::Conversion`] if a `Utf8` input is not base64.
    ///
    /// # Examples
    ///
    /// ```
    /// use envport::core::convert::ValueConversion;
    ///
    /// let encoded = ValueConversion::Base64.apply("VALUE_1").unwrap();
    /// assert_eq!(encoded, "VkFMVUVfMQ==");
    /// assert_eq!(ValueConversion::Utf8.apply(&encoded).unwrap(), "VALUE_1");
    /// ```
    pub fn apply(self, value: &str) -> Result<String> {
        match self {
            ValueConversion::Base64 => Ok(STANDARD.encode(value.as_bytes())),
            ValueConversion::Utf8 => {
                let compact: String = value
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD_LENIENT
                    .decode(&compact)
                    .or_else(|_| URL_SAFE_LENIENT.decode(&compact))
                    .map_err(|_| EnvportError::conversion(self.name()))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl FromStr for ValueConversion {
    type Err = EnvportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| EnvportError::conversion(s))
    }
}

impl fmt::Display for ValueConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode() {
        let conversion = ValueConversion::Base64;
        assert_eq!(conversion.apply("VALUE_1").unwrap(), "VkFMVUVfMQ==");
        assert_eq!(conversion.apply("VALUE_2").unwrap(), "VkFMVUVfMg==");
        assert_eq!(conversion.apply("low_value_1").unwrap(), "bG93X3ZhbHVlXzE=");
        assert_eq!(conversion.apply("").unwrap(), "");
    }

    #[test]
    fn test_utf8_decode() {
        let conversion = ValueConversion::Utf8;
        assert_eq!(conversion.apply("VkFMVUVfMQ==").unwrap(), "VALUE_1");
        assert_eq!(conversion.apply("bG93X3ZhbHVlXzE=").unwrap(), "low_value_1");
    }

    #[test]
    fn test_utf8_decode_lenient_input() {
        let conversion = ValueConversion::Utf8;
        // missing padding
        assert_eq!(conversion.apply("VkFMVUVfMQ").unwrap(), "VALUE_1");
        // wrapped lines
        assert_eq!(conversion.apply("VkFMVU\nVfMQ==\n").unwrap(), "VALUE_1");
        // url-safe alphabet
        assert_eq!(conversion.apply("-_8").unwrap(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_utf8_decode_invalid_base64() {
        let err = ValueConversion::Utf8.apply("not*base64!").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot convert value with type \"utf8\". Accepted values are: base64, utf8"
        );
    }

    #[test]
    fn test_round_trip_unicode() {
        let original = "pässwörd ✓ 密码";
        let encoded = ValueConversion::Base64.apply(original).unwrap();
        assert_eq!(ValueConversion::Utf8.apply(&encoded).unwrap(), original);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ValueConversion::from_str("base64").unwrap(),
            ValueConversion::Base64
        );
        assert_eq!(ValueConversion::from_str("utf8").unwrap(), ValueConversion::Utf8);

        let err = ValueConversion::from_str("hex").unwrap_err();
        assert!(matches!(err, EnvportError::Conversion { .. }));
    }
}
