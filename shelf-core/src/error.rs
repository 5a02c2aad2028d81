//! Error types for shelf-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest and store-path operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (manifest write path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No `package.shelf.json` at the expected path.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.shelf/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
