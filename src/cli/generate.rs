//! Generate banner directories from the reference banner.
//!
//! This module provides the `generate` and `standard` commands. `generate`
//! clones the reference banner into each size named on the command line;
//! `standard` does the same for the whole standard size catalog.
//!
//! All sizes are parsed before any directory is touched, so a typo in the
//! third size cannot leave the first two half-generated.
//!
//! # Examples
//!
//! ```bash
//! bannerforge generate 728x90
//! bannerforge generate 300x250 160x600 970x250
//! bannerforge standard
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::constants::STANDARD_SIZES;
use crate::generator::BannerGenerator;
use crate::size::Size;

/// Parses size tokens, failing on the first invalid one.
pub(crate) fn parse_sizes(specs: &[String]) -> Result<Vec<Size>> {
    specs
        .iter()
        .map(|spec| Size::parse(spec).map_err(Into::into))
        .collect()
}

/// Command to generate banners at explicit sizes.
#[derive(Args)]
pub struct GenerateCommand {
    /// Sizes to generate, as <width>x<height> tokens (e.g. 728x90)
    #[arg(value_name = "SIZE")]
    sizes: Vec<String>,
}

impl GenerateCommand {
    /// Executes the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if no sizes are given, a size token is malformed,
    /// the manifest cannot be found, or generation fails.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        if self.sizes.is_empty() {
            bail!(
                "No sizes specified.\n\n\
                 Usage: bannerforge generate <width>x<height> [<width>x<height>...]\n\
                 Example: bannerforge generate 728x90 160x600"
            );
        }

        let sizes = parse_sizes(&self.sizes)?;

        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let generator = BannerGenerator::new(&config);

        let created = generator.generate_multiple(&sizes)?;

        println!(
            "\n{} Generation complete: {} banner(s) created",
            "✓".green().bold(),
            created
        );
        Ok(())
    }
}

/// Command to generate every size in the standard catalog.
#[derive(Args)]
pub struct StandardCommand {}

impl StandardCommand {
    /// Executes the standard command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be found or generation fails.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let sizes: Vec<Size> = STANDARD_SIZES
            .iter()
            .map(|&(width, height, _)| Size::new(width, height))
            .collect();

        println!("Generating the standard catalog ({} sizes)", sizes.len());

        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;
        let generator = BannerGenerator::new(&config);

        let created = generator.generate_multiple(&sizes)?;

        println!(
            "\n{} Generation complete: {} banner(s) created",
            "✓".green().bold(),
            created
        );
        Ok(())
    }
}
