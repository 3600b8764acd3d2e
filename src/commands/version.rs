//! Version command implementation

use crate::error::Result;
use crate::installer::command::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::manifest::DEFAULT_MANIFEST;

/// Run version command
pub fn run() -> Result<()> {
    println!("depboot {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Manifest: {DEFAULT_MANIFEST}");
    println!("  Installer: {DEFAULT_PROGRAM} {}", DEFAULT_ARGS.join(" "));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
