//! Common test utilities and fixtures for bannerforge integration tests
//!
//! This module consolidates the project fixtures the integration tests share:
//! a temp project with a manifest, a reference banner carrying both size
//! vocabularies, and compiled review-tree banners for review/deploy tests.

// Allow dead code because these utilities are used across different test files
// and not all utilities are used in every test file
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest used by most tests.
pub const DEFAULT_MANIFEST: &str = r#"[project]
name = "25027-acme-summer"
title = "Acme Summer Campaign"

[banners]
reference = "300x250-1"
"#;

/// Reference banner markup carrying both size vocabularies: the ad.size
/// meta / title pair and the `{{width}}`/`{{height}}` placeholders.
pub const REFERENCE_MARKUP: &str = r#"<!doctype html>
<html>
<head>
<meta name="ad.size" content="width=300,height=250">
<title>Ad Banner: 300x250</title>
<link rel="stylesheet" href="../../assets/css/source.css">
</head>
<body>
<div id="banner" width="{{width}}" height="{{height}}"></div>
<script src="assets/js/script.js"></script>
</body>
</html>
"#;

/// Reference stylesheet with the dimension variables substitution rewrites.
pub const REFERENCE_STYLESHEET: &str =
    "$width: 300px;\n$height: 250px;\n#banner { width: $width; height: $height; }\n";

/// Reference script; substitution must never touch it.
pub const REFERENCE_SCRIPT: &str = "console.log('timeline');\n";

/// Compiled markup as the bundler writes it into the review tree, with
/// shared assets referenced two levels up.
pub fn compiled_markup(name: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n\
         <link rel=\"stylesheet\" href=\"../../assets/css/{name}.css\">\n\
         </head>\n<body>\n\
         <img src=\"../../assets/img/bg.png\">\n\
         <script src=\"assets/js/script.js\"></script>\n\
         </body>\n</html>\n"
    )
}

/// Test project builder for creating banner project environments.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
}

impl TestProject {
    /// Create a project directory with the default manifest.
    pub fn new() -> Result<Self> {
        let project = Self::bare()?;
        project.write_manifest(DEFAULT_MANIFEST)?;
        Ok(project)
    }

    /// Create an empty project directory without a manifest.
    pub fn bare() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Get the project directory path.
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Path of a source banner directory.
    pub fn banner_path(&self, name: &str) -> PathBuf {
        self.project_dir.join("banners").join(name)
    }

    /// Path of the compiled review tree.
    pub fn review_path(&self) -> PathBuf {
        self.project_dir.join("_review")
    }

    /// Path of the deploy root.
    pub fn deploy_path(&self) -> PathBuf {
        self.project_dir.join("_deploy")
    }

    /// Write a manifest file to the project directory.
    pub fn write_manifest(&self, content: &str) -> Result<()> {
        let manifest_path = self.project_dir.join("banner.toml");
        fs::write(&manifest_path, content)
            .with_context(|| format!("Failed to write manifest to {}", manifest_path.display()))?;
        Ok(())
    }

    /// Create the reference banner the default manifest points at.
    pub fn add_reference_banner(&self) -> Result<()> {
        self.add_source_banner("300x250-1")
    }

    /// Create a complete source banner directory.
    pub fn add_source_banner(&self, name: &str) -> Result<()> {
        let dir = self.banner_path(name);
        fs::create_dir_all(dir.join("assets/css"))?;
        fs::create_dir_all(dir.join("assets/js"))?;
        fs::write(dir.join("index.html"), REFERENCE_MARKUP)?;
        fs::write(dir.join("assets/css/source.css"), REFERENCE_STYLESHEET)?;
        fs::write(dir.join("assets/js/script.js"), REFERENCE_SCRIPT)?;
        fs::write(dir.join("fallback.jpg"), b"jpeg-bytes")?;
        Ok(())
    }

    /// Create a compiled banner in the review tree along with the shared
    /// assets its markup references and the fallback image in its source.
    pub fn add_compiled_banner(&self, name: &str) -> Result<()> {
        let shared = self.review_path().join("assets");
        fs::create_dir_all(shared.join("css"))?;
        fs::create_dir_all(shared.join("img"))?;
        fs::write(shared.join("img/bg.png"), b"png-bytes")?;
        fs::write(shared.join("css").join(format!("{name}.css")), "body {}")?;

        let compiled = self.review_path().join("banners").join(name);
        fs::create_dir_all(compiled.join("assets/js"))?;
        fs::write(compiled.join("index.html"), compiled_markup(name))?;
        fs::write(compiled.join("assets/js/script.js"), REFERENCE_SCRIPT)?;

        // The unprocessed source carries the fallback image.
        let source = self.banner_path(name);
        fs::create_dir_all(&source)?;
        fs::write(source.join("fallback.jpg"), b"jpeg-bytes")?;
        Ok(())
    }

    /// Build a bannerforge command running inside the project directory.
    pub fn bannerforge(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("bannerforge").unwrap();
        cmd.current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env("BANNERFORGE_NO_PROGRESS", "1");
        cmd
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    /// Assert a file exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert a file does not exist
    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(
            !path.exists(),
            "Expected file to not exist: {}",
            path.display()
        );
    }

    /// Assert a file contains specific content
    pub fn contains(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert!(
            content.contains(expected),
            "Expected file {} to contain '{}'\nActual content: {}",
            path.display(),
            expected,
            content
        );
    }
}
