//! Shelf — local project-archival CLI.
//!
//! # Usage
//!
//! ```text
//! shelf init                      Scaffold package.shelf.json and README.md
//! shelf -s | --save               Save the current directory tree to ~/.shelf
//! shelf -r | --read               Render package.shelf.json to README.md
//! shelf -c | --checkout <name>    Copy a saved project into the current directory
//! shelf -l | --list               List saved projects
//! shelf -h | --help               Show help
//! shelf -v | --version            Show version
//! ```

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::checkout::CheckoutArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    about = "Archive project directories to a per-user store and restore them later",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold package.shelf.json and README.md in the current directory.
    Init,

    /// Save the current directory and subdirectories to ~/.shelf.
    #[command(short_flag = 's', long_flag = "save")]
    Save,

    /// Render package.shelf.json to README.md documentation.
    #[command(short_flag = 'r', long_flag = "read")]
    Render,

    /// Copy a saved project from ~/.shelf to the current directory.
    #[command(short_flag = 'c', long_flag = "checkout")]
    Checkout(CheckoutArgs),

    /// List saved projects.
    #[command(short_flag = 'l', long_flag = "list")]
    List,

    /// Show version.
    #[command(short_flag = 'v', long_flag = "version")]
    Version,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Init) => commands::init::run(),
        Some(Commands::Save) => commands::save::run(),
        Some(Commands::Render) => commands::render::run(),
        Some(Commands::Checkout(args)) => args.run(),
        Some(Commands::List) => commands::list::run(),
        Some(Commands::Version) => {
            println!("shelf v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // No verb: show help and exit successfully, like `shelf -h`.
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
