//! `shelf -c <project>` — copy a saved project into the current directory.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::types::ProjectName;
use shelf_sync::ops;

/// Arguments for `shelf checkout`.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Name of the saved project to copy out of the store.
    pub project: String,
}

impl CheckoutArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let cwd = env::current_dir().context("could not determine current directory")?;

        let name = ProjectName::from(self.project);
        // A not-found error already names the available projects.
        let report = ops::checkout_project_at(&home, &cwd, &name)?;

        println!(
            "✓ Checked out '{}' to {}",
            report.name,
            report.destination.display()
        );
        Ok(())
    }
}
