//! Conversion of a flat framework directory into the versioned bundle layout
//!
//! ```text
//! MyLib.framework/                      MyLib.framework/
//!   MyLib                                 MyLib -> Versions/Current/MyLib
//!   Headers/                  ==>         Headers -> Versions/Current/Headers
//!   Modules/                              Modules -> Versions/Current/Modules
//!   Info.plist                            Resources -> Versions/Current/Resources
//!                                         Versions/
//!                                           Current -> A
//!                                           A/{MyLib,Headers,Modules,Resources/Info.plist}
//! ```

use std::path::Path;

use tracing::info;

use framewright_core::fs;
use framewright_core::CommandRunner;

use crate::error::{FrameworkError, Result};

const VERSIONS: &str = "Versions";
const VERSION_NAME: &str = "A";
const CURRENT: &str = "Current";
const HEADERS: &str = "Headers";
const MODULES: &str = "Modules";
const RESOURCES: &str = "Resources";
const INFO_PLIST: &str = "Info.plist";

/// Restructure the flat framework at `path` into the versioned layout.
///
/// This is a one-shot transformation: a directory that has already been
/// repackaged is rejected. A failing step aborts the sequence and leaves the
/// directory as it is, without rollback.
pub fn repackage(runner: &CommandRunner, path: &Path, binary_name: &str) -> Result<()> {
    check_flat_layout(path, binary_name)?;
    info!(path = %path.display(), binary = binary_name, "repackaging framework");

    let versions = path.join(VERSIONS);
    let version_dir = versions.join(VERSION_NAME);
    let resources = version_dir.join(RESOURCES);

    fs::create_dir_all(&resources)?;

    for entry in [binary_name, HEADERS, MODULES] {
        fs::move_path(runner, &path.join(entry), &version_dir.join(entry))?;
    }
    fs::move_path(runner, &path.join(INFO_PLIST), &resources.join(INFO_PLIST))?;

    fs::symlink(runner, Path::new(VERSION_NAME), &versions.join(CURRENT))?;

    let current = Path::new(VERSIONS).join(CURRENT);
    for entry in [binary_name, HEADERS, MODULES, RESOURCES] {
        fs::symlink(runner, &current.join(entry), &path.join(entry))?;
    }

    info!(path = %path.display(), "framework repackaged");
    Ok(())
}

/// Reject anything that is not a freshly assembled flat framework
fn check_flat_layout(path: &Path, binary_name: &str) -> Result<()> {
    if path.join(VERSIONS).symlink_metadata().is_ok() {
        return Err(FrameworkError::invalid_framework(
            path,
            "already contains a Versions directory",
        ));
    }

    for entry in [binary_name, HEADERS, MODULES, INFO_PLIST] {
        match path.join(entry).symlink_metadata() {
            Ok(meta) if meta.file_type().is_symlink() => {
                return Err(FrameworkError::invalid_framework(
                    path,
                    format!("{} is a symlink", entry),
                ));
            }
            Ok(_) => {}
            Err(_) => {
                return Err(FrameworkError::invalid_framework(
                    path,
                    format!("{} is missing", entry),
                ));
            }
        }
    }

    Ok(())
}
