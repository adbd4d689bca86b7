//! Embedded configuration
//!
//! `remote.toml` is compiled into the image and parsed once at boot.
//! build.rs has already validated it on the host, so a parse failure here
//! means the two parsers disagree; the built-in defaults are used instead.

use defmt::*;
use tuneknob_core::config::RemoteConfig;

/// Embedded configuration (compiled into firmware)
/// Edit remote.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../remote.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> RemoteConfig {
    match RemoteConfig::parse(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            RemoteConfig::default()
        }
    }
}
