//! Package manifest (`Cargo.toml`) version access.
//!
//! Handles the `version` field of the `[package]` section of a crate's
//! manifest.

use toml_edit::{DocumentMut, Item, Value};

use crate::error::{Result, VersionError};
use crate::manifest::VersionSource;

/// Adapter for a manifest describing a single package.
///
/// Operates on the `[package]` section:
/// ```toml
/// [package]
/// name = "fs-stat"
/// version = "0.1.0"  # ← Read and rewritten here
/// edition = "2021"
/// ```
///
/// # Guarantees
///
/// - Uses `toml_edit` to preserve formatting and comments
/// - Only the `version` field changes on write
/// - The input string is never mutated; a rewritten copy is returned
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManifest;

impl PackageManifest {
    pub fn new() -> Self {
        Self
    }
}

impl VersionSource for PackageManifest {
    /// Returns `package.version` from the manifest text.
    ///
    /// # Errors
    ///
    /// - `Toml`: `content` is not valid TOML
    /// - `MissingField`: the document has no `[package]` table or no
    ///   `version` field
    fn read_version(&self, content: &str) -> Result<String> {
        let doc: DocumentMut = content.parse()?;

        let version = doc
            .get("package")
            .and_then(Item::as_table_like)
            .and_then(|pkg| pkg.get("version"))
            .and_then(Item::as_str)
            .ok_or_else(|| VersionError::MissingField("package.version".into()))?;

        Ok(version.to_owned())
    }

    /// Returns the manifest text with `package.version` replaced.
    ///
    /// A document without a `[package]` table gets one; everything else is
    /// carried over unchanged.
    ///
    /// # Errors
    ///
    /// - `Toml`: `content` is not valid TOML
    fn write_version(&self, content: &str, version: &str) -> Result<String> {
        let mut doc: DocumentMut = content.parse()?;

        doc["package"]["version"] = Item::Value(Value::from(version));

        Ok(doc.to_string())
    }

    fn is_private(&self) -> bool {
        false
    }
}
