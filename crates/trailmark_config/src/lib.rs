//! Loading of `trailmark.toml` accumulator options.
//!
//! The `[diagnostics]` table selects how accumulators merge and whether
//! rendered lines carry the trace-id prefix. Every field is optional.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
