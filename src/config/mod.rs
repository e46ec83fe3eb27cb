//! Configuration module for Splinter
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Config file (`--config FILE`, else `splinter.toml` beside the input)
//! 3. Built-in defaults
//!
//! There are no environment-variable overrides.

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{AppConfig, Config, ExtractConfig, OutputConfig, CONFIG_FILE_NAME};
