use std::fs;
use std::path::PathBuf;

use crate::cli::GetArgs;
use crate::error::Result;
use crate::manifest::{Lockfile, PackageManifest, VersionSource};

/// Prints the version recorded in a manifest or lockfile to stdout.
pub fn execute(args: GetArgs) -> Result<()> {
    let path = args.manifest_path.unwrap_or_else(|| {
        PathBuf::from(if args.lockfile {
            "Cargo.lock"
        } else {
            "Cargo.toml"
        })
    });

    log::debug!("Reading version from {}", path.display());
    let content = fs::read_to_string(&path)?;

    let version = if args.lockfile {
        Lockfile::new(args.package).read_version(&content)?
    } else {
        PackageManifest::new().read_version(&content)?
    };

    println!("{version}");
    Ok(())
}
