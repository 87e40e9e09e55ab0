//! Integration tests for cargo-setver
//!
//! These tests verify end-to-end behavior by creating real release
//! directories (manifest plus lockfile) and executing version operations
//! through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const MANIFEST: &str = r#"[package]
name = "fs-stat"
version = "0.1.0"
edition = "2021"
description = "File status probing"

[dependencies]
libc = "0.2"
"#;

pub const LOCKFILE: &str = r#"# This file is automatically @generated by Cargo.
# It is not intended for manual editing.
version = 3

[[package]]
name = "fs-stat"
version = "0.1.0"
dependencies = [
 "libc",
]

[[package]]
name = "libc"
version = "0.2.150"
source = "registry+https://github.com/rust-lang/crates.io-index"
"#;

/// Helper to create a release directory with a manifest and lockfile
#[allow(unused)]
pub fn create_release_dir() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("Cargo.toml"), MANIFEST).unwrap();
    fs::write(temp.path().join("Cargo.lock"), LOCKFILE).unwrap();

    temp
}

/// Helper to run a setver subcommand in the given directory
pub fn run_setver(dir: &Path, subcommand: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cargo-setver");
    cmd.arg("setver")
        .arg(subcommand)
        .args(extra_args)
        .current_dir(dir);

    cmd.assert()
}
