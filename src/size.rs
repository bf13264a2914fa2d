//! Banner dimension parsing and extraction.
//!
//! Sizes appear in two places with different strictness requirements:
//! command-line arguments must be exact `<width>x<height>` tokens and are
//! rejected otherwise, while directory names are scanned leniently for an
//! embedded dimension token and fall back to the Medium Rectangle
//! (300x250) when none is found. [`Size::parse`] implements the strict
//! form, [`Size::extract_or_default`] the lenient one.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::constants::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::core::BannerError;

/// Dimension token embedded in directory names, e.g. the `300x250` in
/// `300x250-v2-dark`. Both components need at least two digits so that
/// tokens like `a1x2b` are not misread as sizes.
fn size_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{2,})x([0-9]{2,})").unwrap())
}

/// A banner's pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a size from explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parses a strict `<width>x<height>` token such as `300x250`.
    ///
    /// Both components must be non-empty, all-digit, and non-zero. Any
    /// other shape (missing separator, signs, whitespace, trailing text)
    /// is rejected so that a mistyped size fails loudly instead of
    /// producing a misnamed banner directory.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::InvalidSize`] when the input does not match
    /// the expected shape.
    pub fn parse(input: &str) -> Result<Self, BannerError> {
        let invalid = || BannerError::InvalidSize {
            input: input.to_string(),
        };

        let (w, h) = input.split_once('x').ok_or_else(invalid)?;
        if w.is_empty()
            || h.is_empty()
            || !w.bytes().all(|b| b.is_ascii_digit())
            || !h.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let width: u32 = w.parse().map_err(|_| invalid())?;
        let height: u32 = h.parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }

    /// Scans a directory name for the first embedded dimension token.
    ///
    /// Returns `None` when the name carries no recognizable `WxH` token,
    /// e.g. for a banner directory named `homepage-takeover`.
    #[must_use]
    pub fn extract(name: &str) -> Option<Self> {
        let caps = size_token_re().captures(name)?;
        let width = caps.get(1)?.as_str().parse().ok()?;
        let height = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { width, height })
    }

    /// Like [`Size::extract`], but falls back to 300x250 when the name
    /// carries no dimension token. Directory-derived sizes are advisory
    /// (display, substitution defaults), so a lenient default keeps odd
    /// directory names usable.
    #[must_use]
    pub fn extract_or_default(name: &str) -> Self {
        Self::extract(name).unwrap_or(Self { width: FALLBACK_WIDTH, height: FALLBACK_HEIGHT })
    }

    /// Directory name for a variant of this size, e.g. `300x250-1`.
    #[must_use]
    pub fn dir_name(&self, variant: &str) -> String {
        format!("{}x{}-{}", self.width, self.height, variant)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
