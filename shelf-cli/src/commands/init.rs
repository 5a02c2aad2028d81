//! `shelf init` — scaffold package.shelf.json and README.md.

use std::env;
use std::fs;

use anyhow::{Context, Result};

use shelf_core::manifest;
use shelf_core::types::ProjectName;

pub fn run() -> Result<()> {
    let cwd = env::current_dir().context("could not determine current directory")?;
    let name = ProjectName::from_dir(&cwd)
        .context("cannot derive a project name from the current directory")?;

    let scaffold = shelf_renderer::scaffold(&name)?;

    // Existing files are reported, never overwritten.
    let manifest_file = manifest::manifest_path(&cwd);
    if manifest_file.exists() {
        println!("package.shelf.json already exists");
    } else {
        manifest::save(&cwd, &scaffold.manifest)
            .with_context(|| format!("failed to write {}", manifest_file.display()))?;
        println!("✓ Created package.shelf.json");
    }

    let readme = cwd.join("README.md");
    if readme.exists() {
        println!("README.md already exists");
    } else {
        fs::write(&readme, scaffold.readme)
            .with_context(|| format!("failed to write {}", readme.display()))?;
        println!("✓ Created README.md");
    }

    Ok(())
}
