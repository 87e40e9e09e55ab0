//! Lockfile (`Cargo.lock`) version access.
//!
//! A lockfile records one `[[package]]` entry per resolved package. The
//! adapter operates on the entry matching a configured package name; when
//! several entries share that name, the first one in document order wins.

use toml_edit::{DocumentMut, Item, Value};

use crate::error::{Result, VersionError};
use crate::manifest::VersionSource;

/// Lockfile entry targeted when no package name is configured.
pub const DEFAULT_PACKAGE: &str = "fs-stat";

/// Adapter for a lockfile describing a collection of packages.
///
/// Operates on the `[[package]]` array of tables:
/// ```toml
/// [[package]]
/// name = "fs-stat"
/// version = "0.1.0"  # ← Read and rewritten here
///
/// [[package]]
/// name = "libc"
/// version = "0.2.150"
/// ```
#[derive(Debug, Clone)]
pub struct Lockfile {
    package: String,
}

impl Lockfile {
    /// Creates an adapter targeting the lockfile entry named `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Name of the lockfile entry this adapter operates on.
    pub fn package(&self) -> &str {
        &self.package
    }

    fn find_entry<'a>(&self, doc: &'a DocumentMut) -> Option<&'a toml_edit::Table> {
        doc.get("package")
            .and_then(Item::as_array_of_tables)
            .and_then(|packages| {
                packages
                    .iter()
                    .find(|pkg| pkg.get("name").and_then(Item::as_str) == Some(self.package()))
            })
    }
}

impl Default for Lockfile {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

impl VersionSource for Lockfile {
    /// Returns the `version` of the first matching `[[package]]` entry.
    ///
    /// # Errors
    ///
    /// - `Toml`: `content` is not valid TOML
    /// - `PackageNotFound`: no entry is named after the target package
    /// - `MissingField`: the matching entry has no `version` field
    fn read_version(&self, content: &str) -> Result<String> {
        let doc: DocumentMut = content.parse()?;

        let entry = self
            .find_entry(&doc)
            .ok_or_else(|| VersionError::PackageNotFound(self.package.clone()))?;

        entry
            .get("version")
            .and_then(Item::as_str)
            .map(str::to_owned)
            .ok_or_else(|| VersionError::MissingField("package.version".into()))
    }

    /// Returns the lockfile text with the matching entry's `version` replaced.
    ///
    /// Every other entry passes through unchanged, in original order. A
    /// lockfile without a matching entry is returned unchanged — unlike
    /// `read_version`, which treats the same situation as an error.
    ///
    /// # Errors
    ///
    /// - `Toml`: `content` is not valid TOML
    fn write_version(&self, content: &str, version: &str) -> Result<String> {
        let mut doc: DocumentMut = content.parse()?;

        if let Some(packages) = doc.get_mut("package").and_then(Item::as_array_of_tables_mut)
            && let Some(entry) = packages
                .iter_mut()
                .find(|pkg| pkg.get("name").and_then(Item::as_str) == Some(self.package()))
        {
            entry["version"] = Item::Value(Value::from(version));
        }

        Ok(doc.to_string())
    }

    fn is_private(&self) -> bool {
        false
    }
}
