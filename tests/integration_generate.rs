//! Integration tests for the generate and standard commands

use predicates::prelude::*;
use std::fs;

mod common;
use common::{FileAssert, REFERENCE_SCRIPT, TestProject};

/// Test generating a single size from the reference banner
#[test]
fn test_generate_creates_banner_from_reference() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reference banner validated: 300x250-1",
        ))
        .stdout(predicate::str::contains("Generated banner: 728x90-1"))
        .stdout(predicate::str::contains("1 banner(s) created"));

    let banner = project.banner_path("728x90-1");
    FileAssert::contains(banner.join("index.html"), "content=\"width=728,height=90\"");
    FileAssert::contains(banner.join("index.html"), "Ad Banner: 728x90");
    FileAssert::contains(banner.join("index.html"), "width=\"728\" height=\"90\"");
    FileAssert::contains(banner.join("assets/css/source.css"), "$width: 728px;");
    FileAssert::contains(banner.join("assets/css/source.css"), "$height: 90px;");
    FileAssert::exists(banner.join("fallback.jpg"));
}

/// Test that scripts come through generation byte-identical
#[test]
fn test_generate_never_rewrites_scripts() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .args(["generate", "160x600"])
        .assert()
        .success();

    let script =
        fs::read_to_string(project.banner_path("160x600-1").join("assets/js/script.js")).unwrap();
    assert_eq!(script, REFERENCE_SCRIPT);
}

/// Test generating several sizes in one invocation
#[test]
fn test_generate_multiple_sizes() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .args(["generate", "160x600", "970x250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated banner: 160x600-1"))
        .stdout(predicate::str::contains("Generated banner: 970x250-1"))
        .stdout(predicate::str::contains("2 banner(s) created"));

    FileAssert::exists(project.banner_path("160x600-1").join("index.html"));
    FileAssert::exists(project.banner_path("970x250-1").join("index.html"));
}

/// Test that an existing banner is skipped, not overwritten
#[test]
fn test_generate_skips_existing_banner() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .success();

    // Local edits must survive a second run.
    let marker = project.banner_path("728x90-1").join("hand-edited.txt");
    fs::write(&marker, "keep me").unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Banner 728x90-1 already exists, skipping",
        ))
        .stdout(predicate::str::contains("0 banner(s) created"));

    FileAssert::exists(&marker);
}

/// Test that generate without sizes is a usage error
#[test]
fn test_generate_requires_sizes() {
    let project = TestProject::new().unwrap();

    project
        .bannerforge()
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No sizes specified"));
}

/// Test that a malformed size fails before anything is written
#[test]
fn test_generate_rejects_malformed_size() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .args(["generate", "300x250", "300x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid size '300x'"));

    // Fail-fast: the valid size was not generated either.
    FileAssert::not_exists(project.banner_path("300x250-1").join("index.html"));
}

/// Test that a missing reference directory fails the whole run
#[test]
fn test_generate_validates_reference_first() {
    let project = TestProject::new().unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Reference banner not found"));

    FileAssert::not_exists(project.banner_path("728x90-1"));
}

/// Test that an incomplete reference banner is rejected
#[test]
fn test_generate_rejects_incomplete_reference() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();
    fs::remove_file(project.banner_path("300x250-1").join("assets/js/script.js")).unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Required file missing in reference banner: assets/js/script.js",
        ));
}

/// Test running outside a banner project
#[test]
fn test_generate_without_manifest() {
    let project = TestProject::bare().unwrap();

    project
        .bannerforge()
        .args(["generate", "728x90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No banner.toml found"));
}

/// Test generating the whole standard catalog
#[test]
fn test_standard_generates_catalog() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .arg("standard")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating the standard catalog (10 sizes)",
        ))
        // 300x250 is the reference itself, so it is skipped.
        .stdout(predicate::str::contains(
            "Banner 300x250-1 already exists, skipping",
        ))
        .stdout(predicate::str::contains("9 banner(s) created"));

    for name in ["728x90-1", "160x600-1", "970x250-1", "320x50-1", "336x250-1"] {
        FileAssert::exists(project.banner_path(name).join("index.html"));
    }
}

/// Test the explicit manifest path flag
#[test]
fn test_generate_with_manifest_path() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();
    let manifest = project.project_path().join("banner.toml");

    // Run from a neutral directory; --manifest-path finds the project.
    let mut cmd = assert_cmd::Command::cargo_bin("bannerforge").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .env("NO_COLOR", "1")
        .env("BANNERFORGE_NO_PROGRESS", "1")
        .args(["generate", "728x90", "--manifest-path"])
        .arg(&manifest)
        .assert()
        .success();

    FileAssert::exists(project.banner_path("728x90-1").join("index.html"));
}
