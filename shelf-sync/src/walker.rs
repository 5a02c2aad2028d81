//! Recursive directory synchronizer.
//!
//! [`synchronize`] mirrors a source tree into a destination tree, pruning
//! entries named in [`EXCLUDED_NAMES`] at any depth. Files are overwritten
//! unconditionally; nothing is ever deleted from the destination here —
//! replace-on-save is a call-site policy (see [`crate::ops`]).

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{io_err, SyncError};

/// Directory-entry names never copied, matched exactly at any depth.
pub const EXCLUDED_NAMES: [&str; 2] = ["node_modules", ".git"];

/// Whether `name` is a member of the exclusion set.
pub fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED_NAMES.iter().any(|excluded| name == *excluded)
}

/// Recursively replicate the tree rooted at `source` into `destination`.
///
/// - `destination` (and any missing ancestors) is created on demand.
/// - Entries are processed in whatever order `read_dir` yields them; no
///   ordering guarantee is made and none is needed — there are no
///   cross-entry invariants.
/// - An excluded name prunes the whole subtree: no recursion, no partial
///   copy, no error.
/// - Directories recurse; recursion depth is bounded by the real tree depth.
///   Entries are classified as directory or not via `file_type()` — symlinks
///   are never followed into, a non-directory symlink copies as file bytes.
/// - Regular files copy with [`std::fs::copy`], overwriting any existing
///   destination file unconditionally.
///
/// The first I/O failure aborts the whole operation and propagates; the
/// destination may be left partially populated (no rollback).
pub fn synchronize(source: &Path, destination: &Path) -> Result<(), SyncError> {
    std::fs::create_dir_all(destination).map_err(|e| io_err(destination, e))?;

    let entries = std::fs::read_dir(source).map_err(|e| io_err(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(source, e))?;
        let name = entry.file_name();
        if is_excluded(&name) {
            log::trace!("pruned: {}", entry.path().display());
            continue;
        }

        let src_path = entry.path();
        let dst_path = destination.join(&name);
        let file_type = entry.file_type().map_err(|e| io_err(&src_path, e))?;
        if file_type.is_dir() {
            synchronize(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(|e| io_err(&src_path, e))?;
            log::debug!("copied: {}", dst_path.display());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
