//! Build script for tuneknob-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates remote.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use tuneknob_core::config::RemoteConfig;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate remote.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=remote.toml");

    let content = fs::read_to_string("remote.toml")
        .unwrap_or_else(|e| panic!("remote.toml: {e} (the firmware embeds it at build time)"));

    // Typed decode catches unknown keys and values that do not fit their field
    let typed: RemoteConfig =
        toml::from_str(&content).unwrap_or_else(|e| panic!("remote.toml: {e}"));

    // The boot parser additionally rejects zero intervals
    match RemoteConfig::parse(&content) {
        Ok(parsed) if parsed == typed => {}
        Ok(parsed) => panic!("remote.toml: boot parser read {parsed:?}, toml read {typed:?}"),
        Err(e) => panic!("remote.toml: rejected by the boot parser: {e:?}"),
    }

    println!("cargo:warning=remote.toml validated successfully");
}
