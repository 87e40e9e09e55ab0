//! Version access for release manifests.
//!
//! This module provides the version read/rewrite operations used by the
//! release pipeline. It is split into two concerns:
//!
//! - **`package`**: The package's own manifest (`Cargo.toml`)
//! - **`lockfile`**: The lockfile recording resolved versions (`Cargo.lock`)
//!
//! All rewrites use `toml_edit` to preserve formatting, comments, and
//! structure.

pub mod lockfile;
pub mod package;

pub use lockfile::{DEFAULT_PACKAGE, Lockfile};
pub use package::PackageManifest;

use crate::error::Result;

/// A manifest shape the version can be read from and written into.
///
/// Implementations are stateless value transformers: each call parses a fresh
/// document from `content`, never mutates the input, and returns either the
/// version or the rewritten text. Callers own all file I/O.
pub trait VersionSource {
    /// Returns the version recorded in `content`.
    fn read_version(&self, content: &str) -> Result<String>;

    /// Returns a copy of `content` with the recorded version replaced.
    ///
    /// Every other field is carried over unchanged. The version string is
    /// opaque; no semver validation is performed.
    fn write_version(&self, content: &str, version: &str) -> Result<String>;

    /// Whether the manifest declares the package private.
    ///
    /// Publish steps skip private packages.
    fn is_private(&self) -> bool;
}
