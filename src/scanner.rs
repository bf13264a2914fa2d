//! Asset reference extraction from compiled banner markup.
//!
//! Compiled banners reference shared assets two levels up the review tree
//! (`../../assets/css/...`, `../../assets/img/...`). Packaging flattens each
//! banner into a self-contained directory, so the markup is scanned for
//! those references to learn which files to copy, then rewritten to point at
//! the flattened `assets/` layout.
//!
//! Only the two recognized reference shapes participate. Absolute URLs, data
//! URIs, and same-directory references are not shared-asset references and
//! pass through untouched.

use std::sync::OnceLock;

use regex::Regex;

/// Prefix of a shared-stylesheet reference in compiled markup.
const CSS_PREFIX: &str = "href=\"../../assets/css/";
/// Prefix of a shared-image reference in compiled markup.
const IMG_PREFIX: &str = "src=\"../../assets/img/";

fn stylesheet_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"href="\.\./\.\./assets/css/([^"]+)""#).unwrap())
}

fn image_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"src="\.\./\.\./assets/img/([^"]+)""#).unwrap())
}

/// Shared-asset references found in one banner's compiled markup.
///
/// Document order and duplicates are preserved; the copy step is idempotent
/// per file, so duplicates cost nothing and dropping them would hide what
/// the markup actually says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    /// Stylesheet file names referenced under the shared `assets/css/` root.
    pub stylesheets: Vec<String>,
    /// Image file names referenced under the shared `assets/img/` root.
    pub images: Vec<String>,
}

impl AssetManifest {
    /// Whether the markup referenced no shared assets at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty() && self.images.is_empty()
    }
}

/// Scan compiled markup for shared-asset references.
#[must_use]
pub fn scan(markup: &str) -> AssetManifest {
    let stylesheets = stylesheet_ref_re()
        .captures_iter(markup)
        .map(|caps| caps[1].to_string())
        .collect();
    let images = image_ref_re().captures_iter(markup).map(|caps| caps[1].to_string()).collect();

    AssetManifest {
        stylesheets,
        images,
    }
}

/// Rewrite shared-asset references for the flattened distributable layout.
///
/// `href="../../assets/css/..."` becomes `href="assets/css/..."` and
/// `src="../../assets/img/..."` becomes `src="assets/img/..."`. Everything
/// else is left byte-identical.
#[must_use]
pub fn rewrite_asset_paths(markup: &str) -> String {
    markup.replace(CSS_PREFIX, "href=\"assets/css/").replace(IMG_PREFIX, "src=\"assets/img/")
}
