//! Global constants used throughout the bannerforge codebase.
//!
//! This module contains the standard ad-size catalog, reference banner
//! requirements, and default directory names that are used across
//! multiple modules. Defining them centrally improves maintainability
//! and makes magic values more discoverable.

/// Manifest file name searched for during project discovery.
pub const MANIFEST_NAME: &str = "banner.toml";

/// Directory that holds banner variants, relative to the project root.
pub const DEFAULT_BANNER_DIR: &str = "banners";

/// Directory the review page is built into, relative to the project root.
pub const DEFAULT_REVIEW_DIR: &str = "_review";

/// Directory deploy archives are written to, relative to the project root.
pub const DEFAULT_DEPLOY_DIR: &str = "_deploy";

/// Name of the reference banner used as the template for new variants.
pub const DEFAULT_REFERENCE: &str = "300x250-1";

/// Files that must exist inside a reference banner before it can be
/// used as a generation template. Paths are relative to the banner
/// directory.
pub const REQUIRED_REFERENCE_FILES: &[&str] =
    &["index.html", "assets/css/source.css", "assets/js/script.js"];

/// Files rewritten by the template substitution engine when a variant is
/// generated. Scripts are copied byte-identical; geometry never lives in
/// them.
pub const TEMPLATE_FILES: &[&str] = &["index.html", "assets/css/source.css"];

/// Static backup image copied alongside each generated variant when the
/// reference banner provides one.
pub const FALLBACK_IMAGE: &str = "fallback.jpg";

/// Width assumed when a directory name carries no recognizable dimension
/// token (the most common ad size, the Medium Rectangle).
pub const FALLBACK_WIDTH: u32 = 300;

/// Height assumed when a directory name carries no recognizable dimension
/// token.
pub const FALLBACK_HEIGHT: u32 = 250;

/// Per-archive size ceiling in kilobytes. Most ad networks reject
/// creatives above this weight, so archives that exceed it are flagged
/// during deploy.
pub const DEFAULT_SIZE_CEILING_KB: u64 = 500;

/// Command line launched by `bannerforge dev` when the manifest does not
/// override it.
pub const DEFAULT_DEV_COMMAND: &[&str] = &["npx", "vite"];

/// The IAB display sizes offered by `bannerforge standard`, as
/// `(width, height, name)` triples.
///
/// The catalog follows the IAB fixed-size display portfolio plus the
/// handful of mobile sizes that turn up in nearly every campaign.
pub const STANDARD_SIZES: &[(u32, u32, &str)] = &[
    (300, 250, "Medium Rectangle"),
    (320, 480, "Mobile Banner"),
    (320, 50, "Mobile Banner"),
    (300, 50, "Mobile Banner Small"),
    (160, 600, "Wide Skyscraper"),
    (300, 600, "Half Page Ad"),
    (728, 90, "Leaderboard"),
    (970, 90, "Super Leaderboard"),
    (970, 250, "Billboard"),
    (336, 250, "Large Rectangle"),
];

/// Variant suffix applied to directories created by `standard` and
/// removed by `cleanup`.
pub const DEFAULT_VARIANT: &str = "1";
