//! # shelf-renderer
//!
//! Tera-based renderer that turns a `package.shelf.json` manifest into the
//! fixed-shape `README.md` document, plus the `shelf init` scaffold pair.
//! Pure string-out — this crate never writes files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf_core::types::Manifest;
//! use shelf_renderer::Renderer;
//!
//! fn render(manifest: &Manifest) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(doc) = renderer.render(manifest) {
//!             println!("{} bytes of README", doc.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod scaffold;

pub use context::{FunctionCtx, TemplateContext};
pub use engine::Renderer;
pub use error::RenderError;
pub use scaffold::{scaffold, Scaffold};
