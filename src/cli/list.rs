//! List the banner directories in a project.
//!
//! The table format is meant for humans; `--format json` emits a stable
//! machine-readable inventory for scripts and CI pipelines. Both read the
//! same directory scan, so a banner appears in one exactly when it appears
//! in the other.
//!
//! # Examples
//!
//! ```bash
//! bannerforge list
//! bannerforge list --format json
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::generator::BannerGenerator;

/// Output format for the banner inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Machine-readable JSON
    Json,
}

/// Command to list the banners in the project.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListCommand {
    /// Executes the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be found or the banner
    /// directory cannot be read.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let generator = BannerGenerator::new(&config);

        let entries = generator.list()?;

        match self.format {
            OutputFormat::Table => {
                if entries.is_empty() {
                    println!("No banners found");
                    return Ok(());
                }

                println!("{}", "Banners:".bold());
                for entry in &entries {
                    println!("  {} ({})", entry.name.cyan(), entry.size);
                }
                println!("\nTotal: {} banner(s)", entries.len());
            }
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "total": entries.len(),
                    "banners": entries,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
        }

        Ok(())
    }
}
