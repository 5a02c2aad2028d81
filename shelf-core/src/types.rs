//! Domain types for the shelf archive store and manifest.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! The manifest types mirror `package.shelf.json` and are pure data — nothing
//! in a manifest is ever executed.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a saved project in the archive store.
///
/// A project is identified by the final path segment of its root directory;
/// the store keeps one subdirectory per name, last save wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl ProjectName {
    /// Derive a project name from the final segment of `dir`.
    ///
    /// Returns `None` for paths with no final segment (`/`, empty paths).
    pub fn from_dir(dir: &Path) -> Option<Self> {
        dir.file_name()
            .map(|s| Self(s.to_string_lossy().into_owned()))
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A documented function entry in the manifest.
///
/// Everything except `name` is optional; absent fields render as empty
/// cells in the generated README table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Root of `package.shelf.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub functions: Vec<ManifestFunction>,
}

impl Manifest {
    /// The canned scaffold manifest written by `shelf init`: one placeholder
    /// function showing every documentable field.
    pub fn example(project_name: &ProjectName) -> Self {
        Manifest {
            name: Some(project_name.0.clone()),
            description: Some(String::new()),
            functions: vec![ManifestFunction {
                name: "example_function".to_string(),
                parameters: vec!["param1".to_string(), "param2".to_string()],
                import: Some("use crate::module::example_function;".to_string()),
                description: Some("Description of what this function does".to_string()),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
