//! Test helpers for black-box specifications: locate a workspace
//! binary and wrap it as an `assert_cmd::Command`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Resolves a compiled workspace binary, falling back to locating it
/// relative to the test binary itself when `CARGO_MANIFEST_DIR` points
/// at the root package rather than the crate that owns the binary.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }
    standard
}

pub fn bin(name: &str) -> Command {
    Command::new(binary_path(name))
}
