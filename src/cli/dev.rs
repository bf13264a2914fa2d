//! Launch the dev server for a single banner.
//!
//! Runs the configured dev command (by default `npx vite`) from the project
//! root with `BANNER` set to the chosen banner directory, so the dev server
//! serves that banner's working tree with live reload. The child process
//! inherits the terminal, and its exit code becomes our exit code.
//!
//! # Examples
//!
//! ```bash
//! bannerforge dev list
//! bannerforge dev 300x250-1
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use strsim::levenshtein;
use tracing::debug;

use crate::config::{ProjectConfig, find_manifest_with_optional};
use crate::core::error::BannerError;
use crate::generator::discover_banner_dirs;

/// Maximum allowed Levenshtein distance as a percentage of target length
/// for "did you mean" suggestions.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Command to launch the dev server for one banner.
#[derive(Args)]
pub struct DevCommand {
    /// Banner directory to serve, or `list` to show what is available
    #[arg(value_name = "BANNER")]
    target: Option<String>,
}

impl DevCommand {
    /// Executes the dev command.
    ///
    /// Without a target (or with `list`) this prints the available banners
    /// and returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the named banner does not exist or the dev
    /// server executable cannot be found.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = find_manifest_with_optional(manifest_path)?;
        let config = ProjectConfig::load(&manifest_path)?;

        let banners = discover_banner_dirs(&config.banner_root)?;

        let target = match self.target.as_deref() {
            // Bare `dev` behaves like `dev list`.
            None | Some("list") => {
                print_available(&banners);
                return Ok(());
            }
            Some(name) => name.to_string(),
        };

        if !banners.contains(&target) {
            let similar = find_similar_banners(&target, &banners);
            if !similar.is_empty() {
                println!("Did you mean: {}?", similar.join(", ").cyan());
            }
            return Err(BannerError::BannerNotFound { name: target }.into());
        }

        launch_dev_server(&config, &target).await
    }
}

/// Prints the banners a dev server can be pointed at.
fn print_available(banners: &[String]) {
    if banners.is_empty() {
        println!("No banners found. Run `bannerforge generate <size>` first.");
        return;
    }
    println!("{}", "Available banners:".bold());
    for name in banners {
        println!("  {}", name.cyan());
    }
}

/// Find similar banner names using Levenshtein distance.
fn find_similar_banners(target: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<_> = available
        .iter()
        .map(|name| (name.clone(), levenshtein(target, name)))
        .collect();

    scored.sort_by_key(|(_, dist)| *dist);

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(name, _)| name)
        .collect()
}

/// Spawns the configured dev command and waits for it to finish.
async fn launch_dev_server(config: &ProjectConfig, banner: &str) -> Result<()> {
    let (program, args) = config
        .dev_command
        .split_first()
        .context("Dev command is empty")?;

    // Resolve through PATH up front so a missing toolchain fails with a
    // clear message instead of a raw spawn error.
    let executable = which::which(program).map_err(|_| BannerError::ToolNotFound {
        command: program.to_string(),
    })?;

    println!(
        "{} Starting dev server for {}",
        "✓".green(),
        banner.cyan().bold()
    );
    debug!(
        "Launching dev server: {} {} (BANNER={})",
        executable.display(),
        args.join(" "),
        banner
    );

    let mut child = tokio::process::Command::new(&executable)
        .args(args)
        .current_dir(&config.root)
        .env("BANNER", banner)
        .env("NODE_ENV", "development")
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("Failed to launch dev server: {}", executable.display()))?;

    let status = child
        .wait()
        .await
        .context("Failed to wait for dev server process")?;

    if !status.success() {
        // Forward the child's exit code rather than wrapping it in an error.
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_find_similar_banners_catches_typo() {
        let available = names(&["300x250-1", "728x90-1", "160x600-1"]);
        let similar = find_similar_banners("300x250-2", &available);
        assert_eq!(similar, vec!["300x250-1".to_string()]);
    }

    #[test]
    fn test_find_similar_banners_ignores_distant_names() {
        let available = names(&["300x250-1"]);
        assert!(find_similar_banners("zzz", &available).is_empty());
    }

    #[test]
    fn test_find_similar_banners_closest_first() {
        let available = names(&["300x600-2", "728x90-1", "300x250-1"]);
        let similar = find_similar_banners("300x250-2", &available);
        assert_eq!(similar, names(&["300x250-1", "300x600-2"]));
    }

    #[tokio::test]
    async fn test_dev_unknown_banner_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("banner.toml"),
            "[project]\nname = \"25027-acme-summer\"\n",
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join("banners/300x250-1")).unwrap();

        let cmd = DevCommand {
            target: Some("999x999-1".to_string()),
        };
        let err = cmd
            .execute_with_manifest_path(Some(temp.path().join("banner.toml")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("999x999-1"));
    }

    #[tokio::test]
    async fn test_dev_bare_lists_and_succeeds() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("banner.toml"),
            "[project]\nname = \"25027-acme-summer\"\n",
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join("banners/300x250-1")).unwrap();

        // Bare `dev` is the same as `dev list`: print and exit cleanly.
        let cmd = DevCommand { target: None };
        cmd.execute_with_manifest_path(Some(temp.path().join("banner.toml")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_dev_list_succeeds_without_banners() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("banner.toml"),
            "[project]\nname = \"25027-acme-summer\"\n",
        )
        .unwrap();

        let cmd = DevCommand {
            target: Some("list".to_string()),
        };
        cmd.execute_with_manifest_path(Some(temp.path().join("banner.toml")))
            .await
            .unwrap();
    }
}
