//! `shelf -l` — list saved projects.

use anyhow::{Context, Result};
use colored::Colorize;

use shelf_core::store;

pub fn run() -> Result<()> {
    let names = store::list_project_names().context("failed to read the archive store")?;
    if names.is_empty() {
        println!("No saved projects found.");
        return Ok(());
    }

    println!("{}", "Saved projects:".bold());
    for name in names {
        println!("  - {name}");
    }
    Ok(())
}
