//! Re-run template substitution over every banner.
//!
//! Useful after editing a banner's markup by hand, or after raising the
//! template placeholders in the reference: every banner directory gets its
//! `index.html` and stylesheet rewritten for its own dimensions. Scripts
//! are never touched.
//!
//! # Examples
//!
//! ```bash
//! bannerforge process
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::generator::BannerGenerator;

/// Command to re-apply template substitution to every banner.
#[derive(Args)]
pub struct ProcessCommand {}

impl ProcessCommand {
    /// Executes the process command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be found or any banner
    /// fails substitution.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let generator = BannerGenerator::new(&config);

        let processed = generator.process_all()?;

        println!(
            "\n{} Processing complete: {} banner(s) updated",
            "✓".green().bold(),
            processed
        );
        Ok(())
    }
}
