//! bannerforge - HTML5 banner campaign toolkit
//!
//! This is the main entry point for the bannerforge CLI tool, which builds
//! display campaigns from a single reference banner. It provides commands for:
//!
//! - Generating banner directories at any pixel dimension (`generate`, `standard`)
//! - Inspecting the project (`list`)
//! - Removing generated banners (`cleanup`)
//! - Re-running template substitution (`process`)
//! - Building the client review page (`review`)
//! - Packaging ad-server-ready archives (`deploy`)
//! - Running a live-reload dev server (`dev`)

use anyhow::Result;
use bannerforge::cli;
use bannerforge::core::error::user_friendly_error;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Enable ANSI colors on Windows terminals.
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
