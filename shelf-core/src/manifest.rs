//! `package.shelf.json` persistence.
//!
//! The manifest lives in the project root (the directory being archived),
//! never inside the store. Loads surface missing-file and malformed-JSON
//! conditions as distinct errors so the CLI can report them precisely.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::Manifest;

/// Fixed manifest filename looked up in the project root.
pub const MANIFEST_FILE: &str = "package.shelf.json";

/// `<dir>/package.shelf.json` — pure, no I/O.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// Load the manifest from `dir`.
///
/// Returns `StoreError::ManifestNotFound` if absent,
/// `StoreError::Parse` (with path + line context) if malformed JSON.
pub fn load(dir: &Path) -> Result<Manifest, StoreError> {
    let path = manifest_path(dir);
    if !path.exists() {
        return Err(StoreError::ManifestNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_json::from_str(&contents).map_err(|e| StoreError::Parse { path, source: e })
}

/// Atomically save the manifest to `<dir>/package.shelf.json`.
///
/// Write flow: serialize → `.tmp` sibling → `rename`. The `.tmp` is always
/// in the same directory as the target (same filesystem — no EXDEV).
pub fn save(dir: &Path, manifest: &Manifest) -> Result<(), StoreError> {
    let path = manifest_path(dir);
    let tmp = dir.join(format!("{MANIFEST_FILE}.tmp"));

    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, &path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectName;
    use tempfile::TempDir;

    #[test]
    fn manifest_path_is_fixed_filename() {
        let path = manifest_path(Path::new("/code/demo"));
        assert_eq!(path, PathBuf::from("/code/demo/package.shelf.json"));
    }

    #[test]
    fn load_missing_manifest_returns_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_malformed_manifest_returns_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(manifest_path(dir.path()), "{not json").expect("write");
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let manifest = Manifest::example(&ProjectName::from("demo"));
        save(dir.path(), &manifest).expect("save");
        let loaded = load(dir.path()).expect("load");
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn save_cleans_up_tmp() {
        let dir = TempDir::new().expect("tempdir");
        save(dir.path(), &Manifest::default()).expect("save");
        assert!(
            !dir.path().join("package.shelf.json.tmp").exists(),
            ".tmp must be gone after successful save"
        );
    }
}
