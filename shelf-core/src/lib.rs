//! Shelf core library — domain types, manifest persistence, store paths, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and manifest structs
//! - [`error`] — [`StoreError`]
//! - [`manifest`] — `package.shelf.json` load / save
//! - [`store`] — `~/.shelf/` path helpers and listing

pub mod error;
pub mod manifest;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use types::{Manifest, ManifestFunction, ProjectName};
