//! Remove generated banner directories.
//!
//! Only the sizes named on the command line are removed, and only the
//! default variant for each size. Sizes that do not exist on disk are
//! skipped without complaint, so `cleanup` is safe to re-run.
//!
//! # Examples
//!
//! ```bash
//! bannerforge cleanup 728x90
//! bannerforge cleanup 300x250 160x600
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::generate::parse_sizes;
use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::generator::BannerGenerator;

/// Command to remove generated banner directories.
#[derive(Args)]
pub struct CleanupCommand {
    /// Sizes to remove, as <width>x<height> tokens (e.g. 728x90)
    #[arg(value_name = "SIZE")]
    sizes: Vec<String>,
}

impl CleanupCommand {
    /// Executes the cleanup command.
    ///
    /// # Errors
    ///
    /// Returns an error if no sizes are given, a size token is malformed,
    /// the manifest cannot be found, or a directory cannot be removed.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        if self.sizes.is_empty() {
            bail!(
                "No sizes specified.\n\n\
                 Usage: bannerforge cleanup <width>x<height> [<width>x<height>...]\n\
                 Example: bannerforge cleanup 728x90 160x600"
            );
        }

        let sizes = parse_sizes(&self.sizes)?;

        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let generator = BannerGenerator::new(&config);

        generator.cleanup(&sizes)?;

        println!("\n{} Cleanup complete", "✓".green().bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_requires_sizes() {
        let cmd = CleanupCommand { sizes: vec![] };
        let err = cmd.execute_with_manifest_path(None).await.unwrap_err();
        assert!(err.to_string().contains("No sizes specified"));
    }

    #[tokio::test]
    async fn test_cleanup_rejects_malformed_size() {
        let cmd = CleanupCommand {
            sizes: vec!["300x".to_string()],
        };
        let err = cmd
            .execute_with_manifest_path(Some(PathBuf::from("/nonexistent/banner.toml")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("300x"));
    }
}
