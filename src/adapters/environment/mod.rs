//! Environments the pipeline publishes into
//!
//! - [`ProcessEnvironment`] - the real process environment plus the runner's env file
//! - [`InMemoryEnvironment`] - an ordered in-memory map for tests and dry runs

pub mod memory;
pub mod process;
pub mod traits;

pub use memory::InMemoryEnvironment;
pub use process::ProcessEnvironment;
pub use traits::{is_valid_name, Environment};
