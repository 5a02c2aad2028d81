//! `shelf -r` — render package.shelf.json to README.md.

use std::env;
use std::fs;

use anyhow::{Context, Result};

use shelf_core::manifest;
use shelf_renderer::Renderer;

pub fn run() -> Result<()> {
    let cwd = env::current_dir().context("could not determine current directory")?;

    let manifest = manifest::load(&cwd)
        .context("cannot render README.md — package.shelf.json missing or invalid")?;
    let doc = Renderer::new()?.render(&manifest)?;

    let readme = cwd.join("README.md");
    fs::write(&readme, doc).with_context(|| format!("failed to write {}", readme.display()))?;

    println!("✓ Rendered package.shelf.json to README.md");
    Ok(())
}
