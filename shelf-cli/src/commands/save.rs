//! `shelf -s` — save the current directory tree to the archive store.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use shelf_sync::ops;

pub fn run() -> Result<()> {
    let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
    let cwd = env::current_dir().context("could not determine current directory")?;

    let report = ops::save_project_at(&home, &cwd)
        .with_context(|| format!("failed to save '{}'", cwd.display()))?;

    println!(
        "✓ Saved project '{}' to {}",
        report.name,
        report.destination.display()
    );
    Ok(())
}
