use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::SetArgs;
use crate::error::{Result, VersionError};
use crate::manifest::{Lockfile, PackageManifest, VersionSource};

/// Writes a new version into the package manifest and keeps the lockfile in
/// sync in the same step.
pub fn execute(args: SetArgs) -> Result<()> {
    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("Cargo.toml"));

    let content = fs::read_to_string(&manifest_path)?;
    let manifest = PackageManifest::new();

    let previous = manifest.read_version(&content)?;
    let rewritten = manifest.write_version(&content, &args.version)?;

    if !args.dry_run {
        fs::write(&manifest_path, rewritten)?;
    }
    log::debug!(
        "{}: {} → {}",
        manifest_path.display(),
        previous,
        args.version
    );

    sync_lockfile(&args, &manifest_path)?;

    if args.dry_run {
        println!(
            "{} {} → {}",
            "Would update".yellow().bold(),
            previous,
            args.version
        );
    } else {
        println!(
            "{} {} → {}",
            "✓ Updated".green().bold(),
            previous.yellow(),
            args.version.green().bold()
        );
    }

    Ok(())
}

/// Rewrites the target package's lockfile entry, if there is a lockfile.
///
/// A lockfile without an entry for the target package is left unchanged; the
/// mismatch is surfaced as a warning rather than a failure so that release
/// runs on fresh checkouts without a lockfile entry still complete.
fn sync_lockfile(args: &SetArgs, manifest_path: &Path) -> Result<()> {
    let lockfile_path = match &args.lockfile_path {
        Some(path) => path.clone(),
        None => manifest_path.with_file_name("Cargo.lock"),
    };

    if !lockfile_path.exists() {
        log::debug!("No lockfile at {}; skipping", lockfile_path.display());
        return Ok(());
    }

    let content = fs::read_to_string(&lockfile_path)?;
    let lockfile = Lockfile::new(&args.package);

    if let Err(VersionError::PackageNotFound(name)) = lockfile.read_version(&content) {
        log::warn!(
            "Package '{}' has no entry in {}; lockfile left unchanged",
            name,
            lockfile_path.display()
        );
    }

    let rewritten = lockfile.write_version(&content, &args.version)?;
    if !args.dry_run {
        fs::write(&lockfile_path, rewritten)?;
    }
    log::debug!("Synced lockfile {}", lockfile_path.display());

    Ok(())
}
