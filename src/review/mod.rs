//! Static review page generation for compiled banners.
//!
//! The review page is a single self-contained HTML file written into the
//! review tree next to the compiled banners. The full banner inventory is
//! embedded as JSON, and a small inline viewer renders each banner in a
//! size-accurate preview frame with dropdown, keyboard, and replay
//! navigation. Building the page is pure read and render; banner
//! directories are never touched.
//!
//! On-disk banner weights are recomputed on every run. They change with
//! every build, so caching them would only ever serve stale numbers.

use anyhow::Result;
use colored::Colorize;
use futures::future::try_join_all;
use serde::Serialize;
use std::path::PathBuf;
use tera::Tera;

use crate::config::ProjectConfig;
use crate::core::BannerError;
use crate::generator::discover_banner_dirs;
use crate::size::Size;
use crate::utils::fs::{get_directory_size, write_text_file};
use crate::utils::progress::spinner_with_message;

/// The inline viewer page, instantiated once per build.
const PAGE_TEMPLATE: &str = include_str!("page.html.tera");

/// One banner as embedded in the review page inventory.
///
/// Field names are camelCase because the struct serializes straight into
/// the JavaScript viewer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    /// Banner directory name, e.g. `300x250-1`.
    pub name: String,
    /// Preview frame width in pixels.
    pub width: u32,
    /// Preview frame height in pixels.
    pub height: u32,
    /// Banner location relative to the review page.
    pub path: String,
    /// Total on-disk size of the compiled banner directory.
    pub size_bytes: u64,
    /// Human-readable rendering of `size_bytes`.
    pub size_formatted: String,
}

/// Builds the static review page from the compiled banner inventory.
pub struct ReviewBuilder {
    config: ProjectConfig,
}

impl ReviewBuilder {
    /// Creates a builder operating on the given project.
    pub fn new(config: ProjectConfig) -> Self {
        Self { config }
    }

    /// Writes the review page and returns its path.
    ///
    /// Banner directory sizes are computed concurrently, one blocking
    /// traversal per banner. An empty inventory still produces a page; the
    /// embedded viewer shows an empty state instead of a preview.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::ReviewTreeMissing`] when the compiled review
    /// tree does not exist.
    pub async fn build(&self) -> Result<PathBuf> {
        let review_banners = self.config.review_banner_root();
        if !review_banners.is_dir() {
            return Err(BannerError::ReviewTreeMissing {
                path: review_banners.display().to_string(),
            }
            .into());
        }

        let names = discover_banner_dirs(&review_banners)?;

        let spinner = spinner_with_message("Scanning compiled banners");
        let mut tasks = Vec::new();
        for name in &names {
            let dir = review_banners.join(name);
            let name = name.clone();
            tasks.push(async move {
                let bytes = get_directory_size(&dir).await?;
                Ok::<(String, u64), anyhow::Error>((name, bytes))
            });
        }
        let sized = try_join_all(tasks).await?;
        spinner.finish_and_clear();

        let entries: Vec<ReviewEntry> = sized
            .into_iter()
            .map(|(name, bytes)| {
                let size = Size::extract_or_default(&name);
                ReviewEntry {
                    path: format!("banners/{name}"),
                    name,
                    width: size.width,
                    height: size.height,
                    size_bytes: bytes,
                    size_formatted: format_bytes(bytes),
                }
            })
            .collect();

        let html = self.render(&entries)?;
        let output = self.config.review_root.join("index.html");
        write_text_file(&output, &html)?;

        println!(
            "{} Review page generated: {} ({} banners)",
            "✓".green(),
            output.display(),
            entries.len()
        );
        Ok(output)
    }

    fn render(&self, entries: &[ReviewEntry]) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("title", &self.config.project.title);
        context.insert("subtitle", &self.subtitle());
        context.insert("count", &entries.len());
        context.insert("banners_json", &serde_json::to_string_pretty(entries)?);

        let mut tera = Tera::default();
        tera.add_raw_template("review.html", PAGE_TEMPLATE)?;
        Ok(tera.render("review.html", &context)?)
    }

    fn subtitle(&self) -> String {
        let date = chrono::Local::now().format("%-m/%-d/%Y");
        match &self.config.project.client_code {
            Some(code) => format!(
                "Project: {} | Client: {} | Generated: {}",
                self.config.project.name, code, date
            ),
            None => format!(
                "Project: {} | Generated: {}",
                self.config.project.name, date
            ),
        }
    }
}

/// Formats a byte count with the smallest unit that keeps the number short.
///
/// One decimal of precision, with a trailing `.0` dropped: `1536` renders
/// as `1.5 KB`, `1024` as `1 KB`. Banner archives never reach GB, so the
/// scale stops at MB.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exponent])
    } else {
        format!("{rounded:.1} {}", UNITS[exponent])
    }
}
