//! Error types for shelf-sync.

use std::path::PathBuf;

use thiserror::Error;

use shelf_core::error::StoreError;
use shelf_core::types::ProjectName;

/// All errors that can arise from synchronize / save / checkout operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the store layer.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory being saved has no final path segment to name it by.
    #[error("cannot derive a project name from '{path}'")]
    InvalidProjectRoot { path: PathBuf },

    /// Checkout target does not exist in the store. Carries the best-effort
    /// store listing so the message can point at what is available.
    #[error("project '{name}' not found in the archive store (available: {})", format_available(.available))]
    ProjectNotFound {
        name: ProjectName,
        available: Vec<String>,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_enumerates_available_projects() {
        let err = SyncError::ProjectNotFound {
            name: ProjectName::from("gamma"),
            available: vec!["alpha".to_string(), "beta".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'gamma'"));
        assert!(msg.contains("alpha, beta"));
    }

    #[test]
    fn not_found_message_with_empty_store_says_none() {
        let err = SyncError::ProjectNotFound {
            name: ProjectName::from("gamma"),
            available: vec![],
        };
        assert!(err.to_string().contains("(none)"));
    }
}
