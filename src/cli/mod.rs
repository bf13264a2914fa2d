//! Command-line interface for the banner toolkit.
//!
//! This module wires the clap command tree to the library crates. Every
//! subcommand resolves the project manifest (`banner.toml`) through
//! [`crate::config::find_manifest_with_optional`], so the tool works from any
//! directory inside a banner project, and `--manifest-path` can point it at a
//! project somewhere else entirely.
//!
//! # Commands
//!
//! - [`generate`](generate) - Clone the reference banner into new sizes
//! - [`standard`](generate) - Generate the whole standard size catalog
//! - [`list`](list) - Show the banners present in the project
//! - [`cleanup`](cleanup) - Remove generated banner directories
//! - [`process`](process) - Re-run template substitution over every banner
//! - [`review`](review) - Build the client review page
//! - [`deploy`](deploy) - Package the compiled banners into zip archives
//! - [`dev`](dev) - Launch the dev server for one banner
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - Adjust log output (verbose wins when both are set)
//! - `--manifest-path <PATH>` - Explicit path to `banner.toml`
//! - `--no-progress` - Disable progress bars and spinners
//!
//! # Examples
//!
//! ```bash
//! bannerforge generate 728x90 160x600
//! bannerforge standard
//! bannerforge list --format json
//! bannerforge review
//! bannerforge deploy
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cleanup;
pub mod deploy;
pub mod dev;
pub mod generate;
pub mod list;
pub mod process;
pub mod review;

use cleanup::CleanupCommand;
use deploy::DeployCommand;
use dev::DevCommand;
use generate::{GenerateCommand, StandardCommand};
use list::ListCommand;
use process::ProcessCommand;
use review::ReviewCommand;

use crate::constants::STANDARD_SIZES;

/// Runtime configuration derived from the global CLI flags.
///
/// Built once by [`Cli::build_config`] before any subcommand runs, so logging
/// and progress behavior are settled before the first line of output.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level directive for the tracing subscriber (`None` disables logging)
    pub log_level: Option<String>,
    /// Whether progress bars should be suppressed
    pub no_progress: bool,
}

impl CliConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the configuration to the running process.
    ///
    /// Installs the tracing subscriber and flips the progress kill switch.
    /// `RUST_LOG` takes precedence over the verbosity flags so users can
    /// request per-module filtering the flags cannot express.
    pub fn apply(&self) {
        if self.no_progress {
            crate::utils::progress::disable_progress();
        }

        if let Some(level) = &self.log_level {
            let filter = std::env::var("RUST_LOG")
                .ok()
                .and_then(|spec| spec.parse::<tracing_subscriber::EnvFilter>().ok())
                .unwrap_or_else(|| tracing_subscriber::EnvFilter::new(level));

            // Logs go to stderr so stdout stays machine-readable for
            // `list --format json`. try_init: tests may have installed a
            // subscriber already.
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
    }
}

/// Renders the standard size catalog appended to the help text.
fn standard_size_catalog() -> String {
    let mut help = String::from("Standard sizes (used by `bannerforge standard`):\n");
    for (width, height, label) in STANDARD_SIZES {
        let dims = format!("{width}x{height}");
        help.push_str(&format!("  {dims:<10} {label}\n"));
    }
    help.push_str("\nBanner directories are named <width>x<height>-<variant>, e.g. 300x250-1.");
    help
}

/// Main CLI structure for the banner toolkit.
#[derive(Parser)]
#[command(
    name = "bannerforge",
    about = "Generate, preview, and package HTML5 banner campaigns",
    version,
    arg_required_else_help = true,
    after_help = standard_size_catalog(),
    long_about = "A toolkit for building HTML5 display campaigns from a single reference \
                  banner. It clones the reference into every required pixel dimension, \
                  rewrites the size-dependent markup and styles, builds a client review \
                  page, and packages each banner into an ad-server-ready zip archive."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the manifest file (banner.toml)
    #[arg(long, global = true, value_name = "PATH")]
    manifest_path: Option<PathBuf>,

    /// Disable progress bars and spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate banners at the given sizes from the reference banner
    #[command(alias = "gen")]
    Generate(GenerateCommand),

    /// Generate every size in the standard catalog
    Standard(StandardCommand),

    /// List the banners in the project
    #[command(alias = "ls")]
    List(ListCommand),

    /// Remove generated banner directories
    Cleanup(CleanupCommand),

    /// Re-run template substitution over every banner
    Process(ProcessCommand),

    /// Build the client review page over the compiled banners
    Review(ReviewCommand),

    /// Package compiled banners into deployment zip archives
    Deploy(DeployCommand),

    /// Launch the dev server for a single banner
    Dev(DevCommand),
}

impl Cli {
    /// Executes the parsed command with default configuration handling.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Builds the runtime configuration from the global flags.
    fn build_config(&self) -> CliConfig {
        let mut config = CliConfig::new();

        // Verbose wins over quiet when both are given.
        if self.verbose {
            config.log_level = Some("debug".to_string());
        } else if self.quiet {
            config.log_level = None;
        } else {
            config.log_level = Some("info".to_string());
        }

        config.no_progress = self.no_progress;
        config
    }

    /// Executes the command with the given configuration.
    async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();

        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Standard(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::List(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Cleanup(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Process(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Review(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Deploy(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Dev(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
        }
    }
}
