//! Template context — serializable rendering payload built from [`Manifest`].

use serde::{Deserialize, Serialize};

use shelf_core::types::Manifest;

use crate::error::RenderError;

/// Rendering payload for the README template.
///
/// Optional manifest fields are flattened here with the generated document's
/// fallbacks applied, so the template stays free of conditionals on
/// missing data: an absent `name` titles the document `Project` and leaves
/// `project-name` in the install snippet; an absent or empty `description`
/// becomes `No description provided.`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub project_name: String,
    pub description: String,
    pub install_name: String,
    pub functions: Vec<FunctionCtx>,
}

/// One row of the Functions table. Absent options render as empty cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCtx {
    pub name: String,
    pub parameters: Vec<String>,
    pub import: String,
    pub description: String,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a [`Manifest`].
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let functions: Vec<FunctionCtx> = manifest
            .functions
            .iter()
            .map(|f| FunctionCtx {
                name: f.name.clone(),
                parameters: f.parameters.clone(),
                import: f.import.clone().unwrap_or_default(),
                description: f.description.clone().unwrap_or_default(),
            })
            .collect();

        let named = manifest.name.clone().filter(|n| !n.is_empty());
        TemplateContext {
            project_name: named.clone().unwrap_or_else(|| "Project".to_string()),
            install_name: named.unwrap_or_else(|| "project-name".to_string()),
            description: manifest
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description provided.".to_string()),
            functions,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
