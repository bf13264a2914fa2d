//! Project manifest loading and configuration resolution.
//!
//! Every bannerforge command operates on a project: a directory containing a
//! `banner.toml` manifest and a banner root. This module owns the manifest
//! schema, its discovery (walking up from the current directory the way
//! Cargo and Git locate their project files), and the resolution of manifest
//! values into the absolute paths and limits the rest of the crate consumes.
//!
//! # Manifest Format
//!
//! ```toml
//! [project]
//! name = "25027-acme-summer"      # required; drives archive naming + review title
//! title = "Acme Summer Campaign"  # optional; review page heading
//!
//! [banners]
//! reference = "300x250-1"         # optional; template for new variants
//! dirs = "banners"                # optional; banner root
//! review = "_review"              # optional; compiled review tree
//! deploy = "_deploy"              # optional; archive output
//!
//! [deploy]
//! size-ceiling-kb = 500           # optional; per-archive weight warning
//!
//! [dev]
//! command = ["npx", "vite"]       # optional; dev server launcher
//! ```
//!
//! Only `[project] name` is required; everything else falls back to the
//! defaults in [`crate::constants`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BANNER_DIR, DEFAULT_DEPLOY_DIR, DEFAULT_DEV_COMMAND, DEFAULT_REFERENCE,
    DEFAULT_REVIEW_DIR, DEFAULT_SIZE_CEILING_KB, MANIFEST_NAME,
};
use crate::core::BannerError;

/// Raw `banner.toml` contents, straight from the TOML parser.
///
/// This is the serde-facing type; commands work with the resolved
/// [`ProjectConfig`] instead.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// The `[project]` section. Required.
    pub project: ProjectSection,
    /// The `[banners]` section. Optional, all fields defaulted.
    #[serde(default)]
    pub banners: BannersSection,
    /// The `[deploy]` section. Optional.
    #[serde(default)]
    pub deploy: DeploySection,
    /// The `[dev]` section. Optional.
    #[serde(default)]
    pub dev: DevSection,
}

/// The `[project]` manifest section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Project name, conventionally `<year>-<client>-<job>`. Drives the
    /// aggregate archive name and the review page title fallback.
    pub name: String,
    /// Human-readable campaign title for the review page heading.
    pub title: Option<String>,
}

/// The `[banners]` manifest section: directory layout overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannersSection {
    /// Reference banner directory name under the banner root.
    pub reference: Option<String>,
    /// Banner root directory, relative to the project root.
    pub dirs: Option<String>,
    /// Review tree directory, relative to the project root.
    pub review: Option<String>,
    /// Deploy output directory, relative to the project root.
    pub deploy: Option<String>,
}

/// The `[deploy]` manifest section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeploySection {
    /// Per-archive weight ceiling in kilobytes; archives above it are
    /// flagged with a warning during deploy.
    pub size_ceiling_kb: Option<u64>,
}

/// The `[dev]` manifest section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevSection {
    /// Command line for the development server, executable first.
    pub command: Option<Vec<String>>,
}

impl Manifest {
    /// Load and parse a manifest from a TOML file.
    ///
    /// Reads the file, parses it, and validates the result. Either the
    /// manifest loads completely or an error is returned; there is no
    /// partially-loaded state.
    ///
    /// # Errors
    ///
    /// - File I/O errors (missing file, permission denied)
    /// - [`BannerError::ManifestParseError`] for invalid TOML
    /// - [`BannerError::ManifestValidationError`] for unusable content
    ///   (empty project name, empty dev command)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let manifest: Self = toml::from_str(&content)
            .map_err(|e| BannerError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| {
                format!(
                    "Invalid TOML syntax in manifest file: {}\n\n\
                    Common TOML syntax errors:\n\
                    - Missing quotes around strings\n\
                    - Unmatched brackets [ ] or braces {{ }}\n\
                    - Invalid characters in keys or values",
                    path.display()
                )
            })?;

        manifest.validate()?;

        Ok(manifest)
    }

    /// Check manifest content beyond what the TOML schema enforces.
    fn validate(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            return Err(BannerError::ManifestValidationError {
                reason: "[project] name must not be empty".to_string(),
            }
            .into());
        }

        if let Some(reference) = &self.banners.reference
            && reference.trim().is_empty()
        {
            return Err(BannerError::ManifestValidationError {
                reason: "[banners] reference must not be empty".to_string(),
            }
            .into());
        }

        if let Some(command) = &self.dev.command
            && command.is_empty()
        {
            return Err(BannerError::ManifestValidationError {
                reason: "[dev] command must list at least the executable".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Project metadata derived from the `[project]` section.
///
/// Campaign projects follow a `<year>-<client>-<job>` naming convention, e.g.
/// `25027-acme-summer`. The convention is advisory: names that do not follow
/// it simply leave the derived fields unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// The raw project name from the manifest.
    pub name: String,
    /// Review page heading; the project name when no title was configured.
    pub title: String,
    /// Leading year/job-number segment of the name, when present.
    pub year: Option<String>,
    /// Client code segment, uppercased, when present.
    pub client_code: Option<String>,
    /// Job code segment, when present.
    pub job_code: Option<String>,
}

impl ProjectInfo {
    /// Derive project metadata from the manifest's `[project]` section.
    #[must_use]
    pub fn from_section(section: &ProjectSection) -> Self {
        let name = section.name.clone();
        let title = section.title.clone().unwrap_or_else(|| name.clone());

        let parts: Vec<&str> = name.split('-').collect();
        let (year, client_code, job_code) = if parts.len() >= 3 {
            (
                Some(parts[0].to_string()),
                Some(parts[1].to_uppercase()),
                Some(parts[2].to_string()),
            )
        } else {
            (None, None, None)
        };

        Self {
            name,
            title,
            year,
            client_code,
            job_code,
        }
    }

    /// Stem of the aggregate deploy archive: the project name uppercased
    /// with the leading `<digits>-` job number stripped.
    ///
    /// `25027-acme-summer` becomes `ACME-SUMMER`.
    #[must_use]
    pub fn archive_stem(&self) -> String {
        let upper = self.name.to_uppercase();
        match upper.split_once('-') {
            Some((head, rest))
                if !head.is_empty()
                    && !rest.is_empty()
                    && head.bytes().all(|b| b.is_ascii_digit()) =>
            {
                rest.to_string()
            }
            _ => upper,
        }
    }
}

/// Fully-resolved project configuration.
///
/// All paths are absolute (rooted at the directory containing the manifest)
/// and all limits are in their final units. This is the type every command
/// and component consumes.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project root: the directory containing `banner.toml`.
    pub root: PathBuf,
    /// Directory holding banner variant directories.
    pub banner_root: PathBuf,
    /// Compiled review tree consumed by `review` and `deploy`.
    pub review_root: PathBuf,
    /// Deploy staging and archive output directory.
    pub deploy_root: PathBuf,
    /// Name of the reference banner directory under `banner_root`.
    pub reference: String,
    /// Per-archive weight ceiling in bytes.
    pub size_ceiling_bytes: u64,
    /// Dev server command line, executable first. Never empty.
    pub dev_command: Vec<String>,
    /// Derived project metadata.
    pub project: ProjectInfo,
}

impl ProjectConfig {
    /// Load the manifest at `manifest_path` and resolve it against its
    /// parent directory.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = Manifest::load(manifest_path)?;
        let root = manifest_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Manifest path has no parent directory"))?
            .to_path_buf();
        Ok(Self::from_manifest(&manifest, root))
    }

    /// Resolve a parsed manifest against a project root.
    #[must_use]
    pub fn from_manifest(manifest: &Manifest, root: PathBuf) -> Self {
        let banner_dir = manifest.banners.dirs.as_deref().unwrap_or(DEFAULT_BANNER_DIR);
        let review_dir = manifest.banners.review.as_deref().unwrap_or(DEFAULT_REVIEW_DIR);
        let deploy_dir = manifest.banners.deploy.as_deref().unwrap_or(DEFAULT_DEPLOY_DIR);

        let reference =
            manifest.banners.reference.clone().unwrap_or_else(|| DEFAULT_REFERENCE.to_string());

        let size_ceiling_kb =
            manifest.deploy.size_ceiling_kb.unwrap_or(DEFAULT_SIZE_CEILING_KB);

        let dev_command = manifest
            .dev
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_DEV_COMMAND.iter().map(ToString::to_string).collect());

        Self {
            banner_root: root.join(banner_dir),
            review_root: root.join(review_dir),
            deploy_root: root.join(deploy_dir),
            reference,
            size_ceiling_bytes: size_ceiling_kb * 1024,
            dev_command,
            project: ProjectInfo::from_section(&manifest.project),
            root,
        }
    }

    /// Absolute path of the reference banner directory.
    #[must_use]
    pub fn reference_dir(&self) -> PathBuf {
        self.banner_root.join(&self.reference)
    }

    /// Absolute path of the compiled banners inside the review tree.
    #[must_use]
    pub fn review_banner_root(&self) -> PathBuf {
        self.review_root.join("banners")
    }
}

/// Find the manifest by searching up the directory tree from the current
/// working directory.
///
/// Mirrors Cargo, Git, and NPM project file discovery: check the current
/// directory for `banner.toml`, then each parent until the filesystem root.
///
/// # Errors
///
/// Returns [`BannerError::ManifestNotFound`] when no manifest exists
/// anywhere up the tree.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir().context(
        "Cannot determine current working directory. This may indicate a permission issue",
    )?;
    find_manifest_from(current)
}

/// Find the manifest using an explicit path or directory search.
///
/// Uses the explicit path when provided (it must exist); otherwise searches
/// up from the current directory like [`find_manifest`].
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(BannerError::ManifestNotFound.into())
            }
        }
        None => find_manifest(),
    }
}

/// Find the manifest by searching up from a specific starting directory.
///
/// 1. Check for `banner.toml` in the starting directory
/// 2. If absent, move to the parent directory
/// 3. Repeat until found or the filesystem root is reached
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_NAME);
        if manifest_path.exists() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(BannerError::ManifestNotFound.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Manifest {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn minimal_manifest_gets_defaults() {
        let manifest = parse("[project]\nname = \"25027-acme-summer\"\n");
        let config = ProjectConfig::from_manifest(&manifest, PathBuf::from("/work/project"));

        assert_eq!(config.banner_root, PathBuf::from("/work/project/banners"));
        assert_eq!(config.review_root, PathBuf::from("/work/project/_review"));
        assert_eq!(config.deploy_root, PathBuf::from("/work/project/_deploy"));
        assert_eq!(config.reference, "300x250-1");
        assert_eq!(config.size_ceiling_bytes, 500 * 1024);
        assert_eq!(config.dev_command, vec!["npx".to_string(), "vite".to_string()]);
        assert_eq!(config.reference_dir(), PathBuf::from("/work/project/banners/300x250-1"));
    }

    #[test]
    fn manifest_overrides_are_honored() {
        let manifest = parse(
            r#"
            [project]
            name = "25027-acme-summer"
            title = "Acme Summer Campaign"

            [banners]
            reference = "320x50-base"
            dirs = "creative"
            review = "out/review"
            deploy = "out/deploy"

            [deploy]
            size-ceiling-kb = 150

            [dev]
            command = ["pnpm", "dev"]
            "#,
        );
        let config = ProjectConfig::from_manifest(&manifest, PathBuf::from("/p"));

        assert_eq!(config.banner_root, PathBuf::from("/p/creative"));
        assert_eq!(config.review_root, PathBuf::from("/p/out/review"));
        assert_eq!(config.deploy_root, PathBuf::from("/p/out/deploy"));
        assert_eq!(config.reference, "320x50-base");
        assert_eq!(config.size_ceiling_bytes, 150 * 1024);
        assert_eq!(config.dev_command, vec!["pnpm".to_string(), "dev".to_string()]);
        assert_eq!(config.project.title, "Acme Summer Campaign");
    }

    #[test]
    fn load_rejects_empty_project_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("banner.toml");
        std::fs::write(&path, "[project]\nname = \"  \"\n").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(err.to_string().contains("name must not be empty"), "got: {err}");
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("banner.toml");
        std::fs::write(&path, "[project\nname = oops").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains("Invalid TOML syntax")), "got: {err}");
    }

    #[test]
    fn load_rejects_empty_dev_command() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("banner.toml");
        std::fs::write(&path, "[project]\nname = \"x\"\n\n[dev]\ncommand = []\n").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(err.to_string().contains("at least the executable"), "got: {err}");
    }

    #[test]
    fn project_info_follows_naming_convention() {
        let manifest = parse("[project]\nname = \"25027-acme-summer\"\n");
        let info = ProjectInfo::from_section(&manifest.project);

        assert_eq!(info.year.as_deref(), Some("25027"));
        assert_eq!(info.client_code.as_deref(), Some("ACME"));
        assert_eq!(info.job_code.as_deref(), Some("summer"));
        // No configured title falls back to the name.
        assert_eq!(info.title, "25027-acme-summer");
    }

    #[test]
    fn project_info_tolerates_unconventional_names() {
        let manifest = parse("[project]\nname = \"sandbox\"\n");
        let info = ProjectInfo::from_section(&manifest.project);

        assert_eq!(info.year, None);
        assert_eq!(info.client_code, None);
        assert_eq!(info.job_code, None);
    }

    #[test]
    fn archive_stem_strips_leading_job_number() {
        let section = ProjectSection {
            name: "25027-acme-summer".to_string(),
            title: None,
        };
        assert_eq!(ProjectInfo::from_section(&section).archive_stem(), "ACME-SUMMER");

        let section = ProjectSection {
            name: "acme-summer".to_string(),
            title: None,
        };
        assert_eq!(ProjectInfo::from_section(&section).archive_stem(), "ACME-SUMMER");

        let section = ProjectSection {
            name: "sandbox".to_string(),
            title: None,
        };
        assert_eq!(ProjectInfo::from_section(&section).archive_stem(), "SANDBOX");
    }

    #[test]
    fn find_manifest_walks_up_to_parent() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::write(root.join("banner.toml"), "[project]\nname = \"x\"\n").unwrap();
        let nested = root.join("banners").join("300x250-1");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_manifest_from(nested).unwrap();
        assert_eq!(found, root.join("banner.toml"));
    }

    #[test]
    fn find_manifest_reports_missing() {
        let temp = TempDir::new().unwrap();
        let err = find_manifest_from(temp.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("No banner.toml found"));
    }

    #[test]
    fn explicit_manifest_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope").join("banner.toml");
        let err = find_manifest_with_optional(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("No banner.toml found"));
    }
}
