//! Tera rendering engine for the generated README documents.
//!
//! Two templates, both embedded into the binary at compile time:
//!
//! | Template           | Produces                                        |
//! |--------------------|-------------------------------------------------|
//! | `readme.md.tera`   | `README.md` from a manifest (`shelf -r`)        |
//! | `scaffold.md.tera` | placeholder `README.md` written by `shelf init` |

use tera::Tera;

use shelf_core::types::{Manifest, ProjectName};

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("readme.md.tera", include_str!("templates/readme.md.tera")),
    ("scaffold.md.tera", include_str!("templates/scaffold.md.tera")),
];

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based README renderer.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and
/// reuse. Rendering is pure — the caller decides where the string goes.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TPLS.to_vec())?;
        Ok(Renderer { tera })
    }

    /// Render the README document for `manifest`.
    pub fn render(&self, manifest: &Manifest) -> Result<String, RenderError> {
        let ctx = TemplateContext::from_manifest(manifest);
        self.tera
            .render("readme.md.tera", &ctx.to_tera_context()?)
            .map_err(RenderError::from)
    }

    /// Render the placeholder README written by `shelf init`.
    pub fn render_scaffold(&self, project_name: &ProjectName) -> Result<String, RenderError> {
        let mut ctx = tera::Context::new();
        ctx.insert("project_name", &project_name.0);
        self.tera
            .render("scaffold.md.tera", &ctx)
            .map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
