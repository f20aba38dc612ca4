//! Domain models and types for envport.
//!
//! The domain layer provides:
//! - **Input maps** ([`InputMap`], [`InputEntry`], [`InputSource`])
//! - **Error types** ([`EnvportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, EnvportError>`]:
//!
//! ```rust
//! use envport::domain::{InputMap, InputSource, Result};
//!
//! fn example() -> Result<()> {
//!     let secrets = InputMap::from_json(InputSource::Secret, r#"{"TOKEN": "abc"}"#)?;
//!     assert_eq!(secrets.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod input;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::EnvportError;
pub use input::{InputEntry, InputMap, InputSource};
pub use result::Result;
