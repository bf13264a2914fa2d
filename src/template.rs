//! Dimension substitution for banner assets.
//!
//! Generated variants start as byte copies of the reference banner, so their
//! markup and stylesheets still carry the reference dimensions. This module
//! rewrites them for the new size with two passes over the text:
//!
//! 1. **Placeholder pass** (every file it is pointed at): `{{width}}` and
//!    `{{height}}` tokens become the decimal values.
//! 2. **Literal pass** (markup and stylesheets only): the known dimension
//!    vocabulary is rewritten in place - unquoted `width=<n>` / `height=<n>`
//!    attribute literals and the `Ad Banner: <w>x<h>` title label in markup,
//!    `$width: <n>px;` / `$height: <n>px;` declared variables in stylesheets.
//!
//! The literal pass is pattern replacement, not a markup parse: it works
//! because the reference template's authors stay within that vocabulary.
//! Anything outside it (quoted attribute values, free-form prose mentioning
//! sizes) is deliberately left alone. Both passes are idempotent for a given
//! [`Size`].

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::size::Size;
use crate::utils::fs::write_text_file;

/// How a file participates in the literal substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// HTML markup: attribute literals and the title label are rewritten.
    Markup,
    /// Stylesheet: declared `$width` / `$height` variables are rewritten.
    Stylesheet,
    /// Anything else: only the placeholder pass applies.
    Other,
}

impl AssetKind {
    /// Classify a file by extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") => Self::Markup,
            Some(ext) if ext.eq_ignore_ascii_case("css") => Self::Stylesheet,
            _ => Self::Other,
        }
    }
}

struct Patterns {
    attr_width: Regex,
    attr_height: Regex,
    size_label: Regex,
    css_width: Regex,
    css_height: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        attr_width: Regex::new(r"width=[0-9]+").unwrap(),
        attr_height: Regex::new(r"height=[0-9]+").unwrap(),
        size_label: Regex::new(r"Ad Banner: [0-9]+x[0-9]+").unwrap(),
        css_width: Regex::new(r"\$width:\s*[0-9]+px;").unwrap(),
        css_height: Regex::new(r"\$height:\s*[0-9]+px;").unwrap(),
    })
}

/// Apply both substitution passes to a text, returning the rewritten copy.
#[must_use]
pub fn substitute(content: &str, size: Size, kind: AssetKind) -> String {
    let width = size.width.to_string();
    let height = size.height.to_string();

    let mut out = content.replace("{{width}}", &width).replace("{{height}}", &height);

    let p = patterns();
    match kind {
        AssetKind::Markup => {
            out = p.attr_width.replace_all(&out, format!("width={width}").as_str()).into_owned();
            out =
                p.attr_height.replace_all(&out, format!("height={height}").as_str()).into_owned();
            out = p
                .size_label
                .replace_all(&out, format!("Ad Banner: {width}x{height}").as_str())
                .into_owned();
        }
        AssetKind::Stylesheet => {
            out = p
                .css_width
                .replace_all(&out, regex::NoExpand(&format!("$width: {width}px;")))
                .into_owned();
            out = p
                .css_height
                .replace_all(&out, regex::NoExpand(&format!("$height: {height}px;")))
                .into_owned();
        }
        AssetKind::Other => {}
    }

    out
}

/// Rewrite a file in place for the given size.
///
/// The file's [`AssetKind`] is derived from its extension. The write is
/// skipped when substitution changes nothing, so re-running over an
/// up-to-date banner touches no files.
///
/// # Errors
///
/// Read or write failure is fatal for the variant this file belongs to;
/// the caller decides whether sibling variants proceed.
pub fn substitute_file(path: &Path, size: Size) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))?;

    let updated = substitute(&content, size, AssetKind::from_path(path));
    if updated != content {
        write_text_file(path, &updated)?;
    }

    Ok(())
}
