//! Configuration types
//!
//! Timing and scaling constants for the pipeline, loaded from a small TOML
//! file embedded in the firmware.

pub mod parse;
pub mod types;

pub use parse::ConfigError;
pub use types::*;
