//! Packaging of compiled banners into deployable archives.
//!
//! Deploy consumes the compiled review tree, never the banner sources: the
//! build step has already bundled scripts and fingerprinted assets by the
//! time packaging runs. For each banner a clean staging directory is
//! assembled containing only the assets its markup actually references,
//! with the shared two-level-up asset paths rewritten to be self-relative.
//! Each staging directory is compressed into `<name>.zip`, all banners in
//! parallel, and once every archive exists they are bundled into a single
//! aggregate archive named from the project metadata. Staging directories
//! are removed afterwards, leaving only archives in the deploy root.
//!
//! Archive weight is advisory: an archive over the configured ceiling
//! produces a warning, not a failure. Ad networks enforce their own limits
//! at upload time; the toolkit's job is to flag the problem early.

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::ProjectConfig;
use crate::constants::FALLBACK_IMAGE;
use crate::core::BannerError;
use crate::generator::discover_banner_dirs;
use crate::scanner;
use crate::utils::fs::{
    copy_dir, ensure_dir, ensure_parent_dir, read_text_file, remove_dir_all, write_text_file,
};
use crate::utils::progress::ProgressBar;

/// A finished per-banner archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployArchive {
    /// Banner name the archive was built from.
    pub name: String,
    /// Final archive size in bytes.
    pub bytes: u64,
    /// Location of the archive inside the deploy root.
    pub path: PathBuf,
}

/// Stages and archives compiled banners.
pub struct DeployPackager {
    config: ProjectConfig,
}

impl DeployPackager {
    /// Creates a packager operating on the given project.
    pub fn new(config: ProjectConfig) -> Self {
        Self { config }
    }

    /// Packages every compiled banner into the deploy root.
    ///
    /// Banners are staged and archived in parallel; each task owns a
    /// disjoint staging subtree and writes a disjoint archive, so no
    /// coordination beyond the final join is needed. If any banner fails,
    /// the aggregate archive is not built and the error lists every failed
    /// banner. On success the per-banner staging directories are removed
    /// and only archives remain.
    ///
    /// # Errors
    ///
    /// - [`BannerError::ReviewTreeMissing`] when the compiled review tree
    ///   does not exist; packaging never triggers the build step itself
    /// - [`BannerError::ArchiveFailed`] when an archive cannot be written
    pub async fn deploy(&self) -> Result<Vec<DeployArchive>> {
        let review_banners = self.config.review_banner_root();
        if !review_banners.is_dir() {
            return Err(BannerError::ReviewTreeMissing {
                path: review_banners.display().to_string(),
            }
            .into());
        }

        let banners = discover_banner_dirs(&review_banners)?;
        if banners.is_empty() {
            println!("No banners found to deploy in {}", review_banners.display());
            return Ok(Vec::new());
        }

        println!("Packaging {} banners", banners.len());
        ensure_dir(&self.config.deploy_root)?;

        let pb = ProgressBar::new(banners.len() as u64);
        pb.set_prefix("Packaging");
        let completed = Arc::new(Mutex::new(0usize));
        let total = banners.len();

        let mut tasks = Vec::new();
        for name in &banners {
            let name = name.clone();
            let config = self.config.clone();
            let pb = pb.clone();
            let completed = Arc::clone(&completed);

            tasks.push(tokio::spawn(async move {
                let packaged = {
                    let config = config.clone();
                    let name = name.clone();
                    tokio::task::spawn_blocking(move || package_banner(&config, &name))
                        .await
                        .context("Failed to join banner packaging task")?
                };

                match packaged {
                    Ok(archive) => {
                        let mut done = completed.lock().await;
                        *done += 1;
                        pb.set_message(format!("Packaged {}/{}", *done, total));
                        pb.inc(1);
                        Ok(archive)
                    }
                    Err(e) => Err(e.context(format!("Failed to package banner '{name}'"))),
                }
            }));
        }

        let results = try_join_all(tasks)
            .await
            .context("Banner packaging tasks failed to complete")?;
        pb.finish_and_clear();

        let mut archives = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(archive) => archives.push(archive),
                Err(e) => failures.push(e),
            }
        }

        if !failures.is_empty() {
            let details = failures
                .iter()
                .map(|e| format!("  {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(anyhow!(
                "Failed to package {} of {} banners:\n{}",
                failures.len(),
                total,
                details
            ));
        }

        archives.sort_by(|a, b| a.name.cmp(&b.name));
        let ceiling = self.config.size_ceiling_bytes;
        for archive in &archives {
            println!(
                "{} Created {}.zip ({:.1} KB)",
                "✓".green(),
                archive.name,
                archive.bytes as f64 / 1024.0
            );
            if archive.bytes > ceiling {
                println!(
                    "{} {}.zip exceeds size limit: {:.1} KB (limit {} KB)",
                    "⚠".yellow(),
                    archive.name,
                    archive.bytes as f64 / 1024.0,
                    ceiling / 1024
                );
            }
        }

        let aggregate = {
            let config = self.config.clone();
            let names = banners.clone();
            tokio::task::spawn_blocking(move || build_aggregate_archive(&config, &names))
                .await
                .context("Failed to join aggregate archive task")??
        };
        println!(
            "{} Created master archive: {} ({} banners)",
            "✓".green(),
            aggregate
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            banners.len()
        );

        // Staging directories go only after every archive is on disk.
        for name in &banners {
            remove_dir_all(&self.config.deploy_root.join(name))?;
        }
        println!("{} Cleaned up staging directories", "✓".green());

        println!(
            "\n{} Deployment complete: {} banners packaged",
            "✓".green().bold(),
            banners.len()
        );
        Ok(archives)
    }

    /// Removes the deploy root and everything in it.
    pub fn clean(&self) -> Result<()> {
        if self.config.deploy_root.exists() {
            remove_dir_all(&self.config.deploy_root)?;
            println!("{} Cleaned deploy directory", "✓".green());
        } else {
            println!("Deploy directory does not exist, nothing to clean");
        }
        Ok(())
    }
}

/// Stages one banner and compresses it, returning the finished archive.
fn package_banner(config: &ProjectConfig, name: &str) -> Result<DeployArchive> {
    let staging = config.deploy_root.join(name);
    stage_banner(config, name, &staging)?;

    let path = config.deploy_root.join(format!("{name}.zip"));
    zip_directory(&staging, &path).map_err(|e| BannerError::ArchiveFailed {
        name: name.to_string(),
        reason: format!("{e:#}"),
    })?;

    let bytes = std::fs::metadata(&path)
        .with_context(|| format!("Failed to read archive metadata: {}", path.display()))?
        .len();

    Ok(DeployArchive {
        name: name.to_string(),
        bytes,
        path,
    })
}

/// Assembles the flattened distributable for one banner.
///
/// The staging directory is clobbered and rebuilt from scratch on every run:
/// 1. rewrite the compiled markup's shared asset paths to self-relative ones
/// 2. pull the static fallback image from the banner *source* (the build
///    step does not process images of that kind)
/// 3. copy each referenced stylesheet and image from the shared compiled
///    asset root, silently skipping references whose file no longer exists
/// 4. pass the unbundled script directory through verbatim
fn stage_banner(config: &ProjectConfig, name: &str, staging: &Path) -> Result<()> {
    remove_dir_all(staging)?;
    ensure_dir(staging)?;

    let compiled = config.review_banner_root().join(name);
    let markup = read_text_file(&compiled.join("index.html"))?;
    let assets = scanner::scan(&markup);
    write_text_file(
        &staging.join("index.html"),
        &scanner::rewrite_asset_paths(&markup),
    )?;

    let fallback = config.banner_root.join(name).join(FALLBACK_IMAGE);
    if fallback.is_file() {
        std::fs::copy(&fallback, staging.join(FALLBACK_IMAGE)).with_context(|| {
            format!("Failed to copy {} into staging for {name}", FALLBACK_IMAGE)
        })?;
    } else {
        debug!("Banner {name} has no source {FALLBACK_IMAGE}, skipping");
    }

    let shared_assets = config.review_root.join("assets");
    copy_referenced(
        &shared_assets.join("css"),
        &staging.join("assets/css"),
        &assets.stylesheets,
    )?;
    copy_referenced(
        &shared_assets.join("img"),
        &staging.join("assets/img"),
        &assets.images,
    )?;

    let scripts = compiled.join("assets/js");
    if scripts.is_dir() {
        copy_dir(&scripts, &staging.join("assets/js"))?;
    }

    Ok(())
}

/// Copies each referenced file from `src_root` into `dst_root`.
///
/// A reference whose source file does not exist is a stale reference, not an
/// error; it is logged and skipped so one outdated link never sinks a whole
/// packaging run.
fn copy_referenced(src_root: &Path, dst_root: &Path, files: &[String]) -> Result<()> {
    for file in files {
        let src = src_root.join(file);
        if !src.is_file() {
            debug!("Referenced asset {} does not exist, skipping", src.display());
            continue;
        }
        let dst = dst_root.join(file);
        ensure_parent_dir(&dst)?;
        std::fs::copy(&src, &dst).with_context(|| {
            format!(
                "Failed to copy asset from {} to {}",
                src.display(),
                dst.display()
            )
        })?;
    }
    Ok(())
}

/// Compresses a directory tree into a zip archive at maximum deflate level.
///
/// Entry names are relative to `src_dir`, so the archive unpacks to the
/// banner's files directly rather than a wrapping directory.
fn zip_directory(src_dir: &Path, archive_path: &Path) -> Result<()> {
    let file = std::fs::File::create(archive_path)
        .with_context(|| format!("Failed to create archive: {}", archive_path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for entry in WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(src_dir)?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let entry_name = relative.to_string_lossy().replace('\\', "/");

        if path.is_dir() {
            writer.add_directory(entry_name, options)?;
        } else {
            writer.start_file(entry_name, options)?;
            let mut source = std::fs::File::open(path)
                .with_context(|| format!("Failed to open file for archiving: {}", path.display()))?;
            std::io::copy(&mut source, &mut writer)?;
        }
    }

    writer.finish()?;
    Ok(())
}

/// Bundles every per-banner archive into one aggregate archive.
///
/// The per-banner entries are already deflated, so they are stored without
/// recompression. The archive is named from the project metadata, e.g.
/// `ACME-SUMMER.zip` for project `25027-acme-summer`.
fn build_aggregate_archive(config: &ProjectConfig, banners: &[String]) -> Result<PathBuf> {
    let stem = config.project.archive_stem();
    let path = config.deploy_root.join(format!("{stem}.zip"));

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create aggregate archive: {}", path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for name in banners {
        let zip_name = format!("{name}.zip");
        writer.start_file(zip_name.clone(), options)?;
        let mut source = std::fs::File::open(config.deploy_root.join(&zip_name))
            .with_context(|| format!("Failed to open archive for bundling: {zip_name}"))?;
        std::io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(path)
}
