//! Result type alias for envport
//!
//! This module provides a convenient Result type alias that uses EnvportError
//! as the error type.

use super::errors::EnvportError;

/// Result type alias for envport operations
///
/// # Examples
///
/// ```
/// use envport::domain::result::Result;
/// use envport::domain::errors::EnvportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(EnvportError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, EnvportError>;
