//! Build the client review page.
//!
//! Scans the compiled review tree and writes a single self-contained
//! `index.html` beside the banners, with every banner embedded in a
//! size-accurate iframe. The page is regenerated from scratch on every
//! run, so it always reflects the banners currently on disk.
//!
//! # Examples
//!
//! ```bash
//! bannerforge review
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::review::ReviewBuilder;

/// Command to build the review page over the compiled banners.
#[derive(Args)]
pub struct ReviewCommand {}

impl ReviewCommand {
    /// Executes the review command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be found, the review tree
    /// does not exist, or the page cannot be written.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;

        ReviewBuilder::new(config).build().await?;
        Ok(())
    }
}
