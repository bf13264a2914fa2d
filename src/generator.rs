//! Banner variant generation from a reference template.
//!
//! A project nominates one banner directory as its reference; every other
//! size is a structural clone of it with the dimensions rewritten. This
//! module owns that lifecycle: validating the reference before it is used
//! as a source, materializing new variant directories, enumerating what
//! exists, and removing variants on request.
//!
//! Generation never overwrites: a variant directory that already exists is
//! skipped with a warning, so re-running `generate` is safe. Within a batch
//! each size is processed independently; one failed variant does not stop
//! the others.

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::constants::{DEFAULT_VARIANT, FALLBACK_IMAGE, REQUIRED_REFERENCE_FILES, TEMPLATE_FILES};
use crate::core::BannerError;
use crate::size::Size;
use crate::template;
use crate::utils::fs::{copy_dir, remove_dir_all};

/// Result of generating a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The variant directory was created and substituted.
    Created,
    /// The variant directory already existed and was left untouched.
    SkippedExisting,
}

/// A banner directory paired with the size derived from its name.
///
/// Serializes flat (`{"name": ..., "width": ..., "height": ...}`) for the
/// JSON inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerEntry {
    /// Directory name under the banner root, e.g. `300x250-1`.
    pub name: String,
    /// Size parsed from the name, or the default when the name carries no
    /// dimension token.
    #[serde(flatten)]
    pub size: Size,
}

/// Generates, lists, and removes banner variant directories.
pub struct BannerGenerator<'a> {
    config: &'a ProjectConfig,
}

impl<'a> BannerGenerator<'a> {
    /// Creates a generator operating on the given project.
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Confirms the reference banner exists and carries every required file.
    ///
    /// This is a gate, not a report: the first missing piece fails the check
    /// and nothing has been copied yet at that point.
    ///
    /// # Errors
    ///
    /// - [`BannerError::ReferenceNotFound`] when the directory is absent
    /// - [`BannerError::ReferenceFileMissing`] naming the first missing file
    pub fn validate_reference(&self) -> Result<()> {
        let reference = self.config.reference_dir();
        if !reference.is_dir() {
            return Err(BannerError::ReferenceNotFound {
                path: reference.display().to_string(),
            }
            .into());
        }

        for file in REQUIRED_REFERENCE_FILES {
            if !reference.join(file).is_file() {
                return Err(BannerError::ReferenceFileMissing {
                    file: (*file).to_string(),
                }
                .into());
            }
        }

        println!(
            "{} Reference banner validated: {}",
            "✓".green(),
            self.config.reference
        );
        Ok(())
    }

    /// Materializes one variant directory for `size`.
    ///
    /// Clones the reference directory, rewrites dimensions in the markup and
    /// stylesheet, and carries the static fallback image over when the
    /// reference has one. An existing target directory is never overwritten;
    /// the call becomes a warning and a no-op.
    pub fn generate(&self, size: Size) -> Result<GenerateOutcome> {
        let dir_name = size.dir_name(DEFAULT_VARIANT);
        let target = self.config.banner_root.join(&dir_name);

        if target.exists() {
            println!(
                "{} Banner {} already exists, skipping",
                "⚠".yellow(),
                dir_name
            );
            return Ok(GenerateOutcome::SkippedExisting);
        }

        let reference = self.config.reference_dir();
        debug!(
            "Copying reference {} to {}",
            reference.display(),
            target.display()
        );
        copy_dir(&reference, &target)
            .with_context(|| format!("Failed to clone reference banner into {dir_name}"))?;

        for file in TEMPLATE_FILES {
            template::substitute_file(&target.join(file), size)?;
        }

        let fallback = reference.join(FALLBACK_IMAGE);
        if fallback.is_file() {
            std::fs::copy(&fallback, target.join(FALLBACK_IMAGE)).with_context(|| {
                format!("Failed to copy {FALLBACK_IMAGE} into {dir_name}")
            })?;
        } else {
            println!(
                "{} No {} found in reference banner",
                "⚠".yellow(),
                FALLBACK_IMAGE
            );
        }

        println!("{} Generated banner: {}", "✓".green(), dir_name);
        Ok(GenerateOutcome::Created)
    }

    /// Generates a batch of variants, validating the reference exactly once.
    ///
    /// Failures are isolated per size: every entry is attempted, and the
    /// batch fails at the end listing each size that could not be generated.
    /// Returns the number of variants actually created (skipped directories
    /// don't count).
    pub fn generate_multiple(&self, sizes: &[Size]) -> Result<usize> {
        self.validate_reference()?;

        let mut created = 0;
        let mut failures = Vec::new();
        for size in sizes {
            match self.generate(*size) {
                Ok(GenerateOutcome::Created) => created += 1,
                Ok(GenerateOutcome::SkippedExisting) => {}
                Err(e) => {
                    println!("{} Failed to generate {}: {e:#}", "✗".red(), size);
                    failures.push((size.to_string(), e));
                }
            }
        }

        if !failures.is_empty() {
            let details = failures
                .iter()
                .map(|(size, e)| format!("  {size}: {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(anyhow!(
                "Failed to generate {} of {} banners:\n{}",
                failures.len(),
                sizes.len(),
                details
            ));
        }

        Ok(created)
    }

    /// Enumerates existing banner directories, sorted by name.
    ///
    /// Directories whose name starts with `_` are private (templates, build
    /// output) and are excluded. A missing banner root yields an empty list
    /// rather than an error.
    pub fn list(&self) -> Result<Vec<BannerEntry>> {
        let names = discover_banner_dirs(&self.config.banner_root)?;
        Ok(names
            .into_iter()
            .map(|name| {
                let size = Size::extract_or_default(&name);
                BannerEntry { name, size }
            })
            .collect())
    }

    /// Removes the variant-1 directory for each size.
    ///
    /// Deleting a size that was never generated is a silent no-op, so
    /// cleanup scripts can list every size they might have created.
    pub fn cleanup(&self, sizes: &[Size]) -> Result<()> {
        for size in sizes {
            let dir_name = size.dir_name(DEFAULT_VARIANT);
            let target = self.config.banner_root.join(&dir_name);
            if target.exists() {
                remove_dir_all(&target)?;
                println!("{} Removed banner: {}", "✓".green(), dir_name);
            } else {
                debug!("Banner {dir_name} does not exist, nothing to remove");
            }
        }
        Ok(())
    }

    /// Re-applies template substitution to every existing banner.
    ///
    /// Each banner's markup and stylesheet are rewritten for the size
    /// derived from the directory name, so placeholders left behind by a
    /// hand-copied banner get resolved. Substitution is idempotent: banners
    /// already carrying their own dimensions come out unchanged. Returns the
    /// number of banners processed.
    pub fn process_all(&self) -> Result<usize> {
        let names = discover_banner_dirs(&self.config.banner_root)?;
        if names.is_empty() {
            println!("No banners found in {}", self.config.banner_root.display());
            return Ok(0);
        }

        let mut processed = 0;
        let mut failures = Vec::new();
        for name in &names {
            let size = Size::extract_or_default(name);
            match self.process_banner(name, size) {
                Ok(true) => {
                    processed += 1;
                    println!("{} Processed {} ({})", "✓".green(), name, size);
                }
                Ok(false) => {}
                Err(e) => {
                    println!("{} Failed to process {}: {e:#}", "✗".red(), name);
                    failures.push((name.clone(), e));
                }
            }
        }

        if !failures.is_empty() {
            let details = failures
                .iter()
                .map(|(name, e)| format!("  {name}: {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(anyhow!(
                "Failed to process {} of {} banners:\n{}",
                failures.len(),
                names.len(),
                details
            ));
        }

        Ok(processed)
    }

    /// Substitutes one banner in place. Returns `false` when the banner has
    /// no markup to rewrite.
    fn process_banner(&self, name: &str, size: Size) -> Result<bool> {
        let dir = self.config.banner_root.join(name);

        let markup = dir.join(TEMPLATE_FILES[0]);
        if !markup.is_file() {
            println!(
                "{} Banner {} has no {}, skipping substitution",
                "⚠".yellow(),
                name,
                TEMPLATE_FILES[0]
            );
            return Ok(false);
        }
        template::substitute_file(&markup, size)?;

        for file in &TEMPLATE_FILES[1..] {
            let path = dir.join(file);
            if path.is_file() {
                template::substitute_file(&path, size)?;
            } else {
                debug!("Banner {name} has no {file}, skipping");
            }
        }

        Ok(true)
    }
}

/// Lists the non-private banner directory names directly under `root`,
/// sorted by name.
///
/// Shared by the generator (against the banner root) and the deploy
/// packager (against the compiled review tree): both treat a leading `_` as
/// the private marker and ignore files. A missing root yields an empty
/// list.
pub fn discover_banner_dirs(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('_') {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}
