//! Package compiled banners into deployment archives.
//!
//! `deploy` walks the compiled review tree, stages each banner with its
//! shared assets inlined, and zips every one into an ad-server-ready
//! archive plus a master archive for hand-off. `deploy clean` removes the
//! whole deploy directory.
//!
//! # Examples
//!
//! ```bash
//! bannerforge deploy
//! bannerforge deploy clean
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::deploy::DeployPackager;

/// Command to package banners for deployment.
#[derive(Args)]
pub struct DeployCommand {
    /// The deploy operation to perform (defaults to packaging)
    #[command(subcommand)]
    command: Option<DeploySubcommand>,
}

/// Subcommands for the deploy command.
#[derive(Subcommand)]
enum DeploySubcommand {
    /// Remove the deploy directory and every archive in it
    Clean,
}

impl DeployCommand {
    /// Executes the deploy command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be found, the review tree
    /// does not exist, or packaging fails.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let packager = DeployPackager::new(config);

        match self.command {
            Some(DeploySubcommand::Clean) => packager.clean(),
            None => {
                packager.deploy().await?;
                Ok(())
            }
        }
    }
}
