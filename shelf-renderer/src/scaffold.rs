//! `shelf init` scaffold — canned manifest plus matching placeholder README.

use shelf_core::types::{Manifest, ProjectName};

use crate::engine::Renderer;
use crate::error::RenderError;

/// The pair of documents `shelf init` writes for a fresh project.
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub manifest: Manifest,
    pub readme: String,
}

/// Build the scaffold for `project_name`.
///
/// The manifest carries one placeholder example function; the README is the
/// placeholder-comment variant of the generated document. Writing (and the
/// don't-overwrite-existing-files policy) is the caller's concern.
pub fn scaffold(project_name: &ProjectName) -> Result<Scaffold, RenderError> {
    let renderer = Renderer::new()?;
    Ok(Scaffold {
        manifest: Manifest::example(project_name),
        readme: renderer.render_scaffold(project_name)?,
    })
}
