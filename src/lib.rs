//! bannerforge - HTML5 Banner Campaign Toolkit
//!
//! A toolkit for building HTML5 display campaigns from a single reference
//! banner. One banner is authored by hand at the reference size; bannerforge
//! clones it into every other pixel dimension the campaign needs, rewrites the
//! size-dependent markup and styles, builds a client review page, and packages
//! each banner into an ad-server-ready zip archive.
//!
//! # Architecture Overview
//!
//! bannerforge follows a reference/clone model where:
//! - `banner.toml` names the project and points at the reference banner
//! - The reference banner (e.g. `banners/300x250-1/`) is the single source of truth
//! - Every other size is generated from it and re-generated at will
//! - A bundler compiles the working tree into `_review/`, which review and
//!   deploy consume as-is
//!
//! ## Key Features
//!
//! - **One source of truth**: Edit the reference banner, regenerate the rest
//! - **Size-aware substitution**: Dimensions are rewritten in markup and styles, never in scripts
//! - **Standard catalog**: The common IAB sizes are one command away
//! - **Self-contained review**: A single HTML page frames every banner at true size
//! - **Ad-server packaging**: Per-banner zips plus a master archive, size-checked
//!
//! # Core Modules
//!
//! ## Pipeline
//! - [`cli`] - Command-line interface with one module per subcommand
//! - [`config`] - Manifest discovery and parsing (banner.toml)
//! - [`generator`] - Reference validation, banner generation, and cleanup
//! - [`template`] - Size substitution over markup and stylesheets
//! - [`scanner`] - Shared-asset reference extraction from compiled markup
//! - [`review`] - Client review page builder
//! - [`deploy`] - Staging, zipping, and the master archive
//!
//! ## Supporting Modules
//! - [`constants`] - Directory names, standard sizes, and defaults
//! - [`core`] - Error types and user-facing error presentation
//! - [`size`] - The `WxH` dimension type and its parsers
//! - [`utils`] - Filesystem helpers and progress reporting
//!
//! # Manifest Format (banner.toml)
//!
//! ```toml
//! [project]
//! name = "25027-acme-summer"
//! title = "Acme Summer Campaign"
//!
//! [banners]
//! reference = "300x250-1"
//!
//! [deploy]
//! size-ceiling-kb = 200
//!
//! [dev]
//! command = ["npx", "vite"]
//! ```
//!
//! Every key is optional except `[project] name`; the directory layout
//! defaults to `banners/`, `_review/`, and `_deploy/` next to the manifest.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Generate two sizes from the reference banner
//! bannerforge generate 728x90 160x600
//!
//! # Generate the whole standard catalog
//! bannerforge standard
//!
//! # See what exists
//! bannerforge list
//!
//! # Build the review page and package for hand-off
//! bannerforge review
//! bannerforge deploy
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod size;

pub mod generator;
pub mod scanner;
pub mod template;

pub mod deploy;
pub mod review;

pub mod utils;
