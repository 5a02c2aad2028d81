//! # shelf-sync
//!
//! Recursive directory synchronizer and the save / checkout policies built
//! on it. Call [`synchronize`] to mirror one tree into another (pruning the
//! fixed exclusion set), or the [`ops`] entrypoints for the store-aware
//! flows used by `shelf -s` and `shelf -c`.

pub mod error;
pub mod ops;
pub mod walker;

pub use error::SyncError;
pub use ops::{checkout_project_at, save_project_at, CheckoutReport, SaveReport};
pub use walker::{is_excluded, synchronize, EXCLUDED_NAMES};
