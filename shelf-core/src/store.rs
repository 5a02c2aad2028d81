//! Archive store paths and listing.
//!
//! # Storage layout
//!
//! ```text
//! ~/.shelf/
//!   <project_name>/   (one subdirectory per saved project — verbatim tree copy)
//! ```
//!
//! # API pattern
//!
//! `fn_at(home: &Path, …)` forms take an explicit home and are what tests
//! use with `TempDir`; a wrapper without `_at` derives home from
//! `dirs::home_dir()` and delegates. Tests must NEVER call the wrappers.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::ProjectName;

/// `<home>/.shelf` — pure, no I/O.
pub fn store_root_at(home: &Path) -> PathBuf {
    home.join(".shelf")
}

/// `<home>/.shelf`, created (mode `0700` on unix) if it does not yet exist.
pub fn ensure_store_root_at(home: &Path) -> Result<PathBuf, StoreError> {
    let root = store_root_at(home);
    if !root.exists() {
        std::fs::create_dir_all(&root)?;
        set_dir_permissions(&root)?;
    }
    Ok(root)
}

/// `<home>/.shelf/<project>` — pure, no I/O.
pub fn project_dir_at(home: &Path, project: &ProjectName) -> PathBuf {
    store_root_at(home).join(&project.0)
}

/// Lists the names of all saved projects under `<home>/.shelf/`, sorted.
///
/// A missing store root is not an error: the listing is simply empty.
pub fn list_project_names_at(home: &Path) -> Result<Vec<ProjectName>, StoreError> {
    let root = store_root_at(home);
    if !root.exists() {
        return Ok(vec![]);
    }
    let mut names: Vec<ProjectName> = std::fs::read_dir(&root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| ProjectName::from(e.file_name().to_string_lossy().into_owned()))
        .collect();
    names.sort();
    Ok(names)
}

/// `list_project_names_at` convenience wrapper.
pub fn list_project_names() -> Result<Vec<ProjectName>, StoreError> {
    list_project_names_at(&home()?)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, StoreError> {
    dirs::home_dir().ok_or(StoreError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
