use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::manifest::DEFAULT_PACKAGE;

#[derive(Parser)]
#[command(name = "cargo-setver", bin_name = "cargo")]
#[command(styles = clap_cargo::style::CLAP_STYLING)]
pub struct CargoCli {
    #[command(subcommand)]
    pub command: CargoCommand,
}

#[derive(Subcommand)]
pub enum CargoCommand {
    /// Read or rewrite the package version in Cargo manifests and lockfiles.
    Setver(SetverArgs),
}

#[derive(Parser, Debug)]
pub struct SetverArgs {
    #[command(subcommand)]
    pub command: SetverCommand,
}

#[derive(Subcommand, Debug)]
pub enum SetverCommand {
    /// Print the current version recorded in a manifest
    Get(GetArgs),

    /// Write a new version into a manifest and its lockfile
    Set(SetArgs),
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Read from the lockfile entry for --package instead of the package manifest
    #[arg(long)]
    pub lockfile: bool,

    /// Path to the manifest to read
    ///
    /// Defaults to ./Cargo.toml, or ./Cargo.lock when --lockfile is set.
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Package name to look up in the lockfile
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    pub package: String,
}

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// The version to write
    ///
    /// Passed through opaquely; pre-release and build-metadata suffixes are
    /// written exactly as given.
    pub version: String,

    /// Path to the package manifest (defaults to ./Cargo.toml)
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Path to the lockfile to keep in sync
    ///
    /// Defaults to Cargo.lock next to the manifest. A missing lockfile is
    /// skipped silently.
    #[arg(long, value_name = "PATH")]
    pub lockfile_path: Option<PathBuf>,

    /// Package name whose lockfile entry is updated
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Show what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
