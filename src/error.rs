//! Error types for cargo-setver.
//!
//! All operations return `Result<T>` which aliases `Result<T, VersionError>`.

use thiserror::Error;

/// Errors from version read/rewrite operations.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Package not found in the lockfile.
    #[error("Package '{0}' not found")]
    PackageNotFound(String),

    /// Manifest lacks a field the operation needs.
    #[error("Manifest is missing '{0}'")]
    MissingField(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse or serialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cargo-setver operations.
pub type Result<T> = std::result::Result<T, VersionError>;
