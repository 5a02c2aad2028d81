//! Save and checkout policies layered on the synchronizer.
//!
//! Both policies call [`synchronize`](crate::walker::synchronize) unchanged;
//! they differ only in how the destination is prepared:
//!
//! - **save** force-removes `<store>/<name>` first, so a re-save never keeps
//!   files that were deleted from the source since the last save.
//! - **checkout** merges onto `<cwd>/<name>` — files already present in the
//!   destination but absent from the archive survive. This asymmetry with
//!   save is fixed behavior, not a bug.

use std::path::{Path, PathBuf};

use shelf_core::store;
use shelf_core::types::ProjectName;

use crate::error::{io_err, SyncError};
use crate::walker::synchronize;

/// Outcome of a successful save, for CLI printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub name: ProjectName,
    pub destination: PathBuf,
}

/// Outcome of a successful checkout, for CLI printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReport {
    pub name: ProjectName,
    pub destination: PathBuf,
}

/// Save the tree rooted at `project_root` into `<home>/.shelf/<name>`.
///
/// The name is the final segment of `project_root`. Any prior save under the
/// same name is removed in full before copying, making save idempotent and
/// overwrite-complete.
pub fn save_project_at(home: &Path, project_root: &Path) -> Result<SaveReport, SyncError> {
    let name = ProjectName::from_dir(project_root).ok_or_else(|| SyncError::InvalidProjectRoot {
        path: project_root.to_path_buf(),
    })?;

    store::ensure_store_root_at(home)?;
    let destination = store::project_dir_at(home, &name);

    match std::fs::remove_dir_all(&destination) {
        Ok(()) => log::debug!("replacing prior save: {}", destination.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(&destination, e)),
    }

    synchronize(project_root, &destination)?;
    log::info!("saved '{}' to {}", name, destination.display());
    Ok(SaveReport { name, destination })
}

/// Copy `<home>/.shelf/<name>` into `<target_parent>/<name>`.
///
/// The archived project must exist; otherwise the error carries the
/// best-effort store listing (empty when the store root is missing or
/// unreadable — enumeration failure never masks the not-found condition).
pub fn checkout_project_at(
    home: &Path,
    target_parent: &Path,
    name: &ProjectName,
) -> Result<CheckoutReport, SyncError> {
    let source = store::project_dir_at(home, name);
    if !source.is_dir() {
        let available = store::list_project_names_at(home)
            .map(|names| names.into_iter().map(|n| n.0).collect())
            .unwrap_or_default();
        return Err(SyncError::ProjectNotFound {
            name: name.clone(),
            available,
        });
    }

    let destination = target_parent.join(&name.0);
    synchronize(&source, &destination)?;
    log::info!("checked out '{}' to {}", name, destination.display());
    Ok(CheckoutReport {
        name: name.clone(),
        destination,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
