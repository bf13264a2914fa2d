//! Integration tests for the list command

use predicates::prelude::*;
use std::fs;

mod common;
use common::TestProject;

/// Test listing generated banners in table format
#[test]
fn test_list_shows_banners() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();
    project.add_source_banner("728x90-1").unwrap();

    project
        .bannerforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Banners:"))
        .stdout(predicate::str::contains("300x250-1 (300x250)"))
        .stdout(predicate::str::contains("728x90-1 (728x90)"))
        .stdout(predicate::str::contains("Total: 2 banner(s)"));
}

/// Test listing with no banners
#[test]
fn test_list_empty_project() {
    let project = TestProject::new().unwrap();

    project
        .bannerforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No banners found"));
}

/// Test that private directories are excluded from the listing
#[test]
fn test_list_excludes_private_dirs() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();
    fs::create_dir_all(project.project_path().join("banners/_archive")).unwrap();

    project
        .bannerforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("_archive").not())
        .stdout(predicate::str::contains("Total: 1 banner(s)"));
}

/// Test the JSON output format
#[test]
fn test_list_json_format() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();
    project.add_source_banner("970x250-1").unwrap();

    let output = project
        .bannerforge()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["total"], 2);

    let banners = payload["banners"].as_array().unwrap();
    assert_eq!(banners.len(), 2);
    // Sorted by directory name.
    assert_eq!(banners[0]["name"], "300x250-1");
    assert_eq!(banners[0]["width"], 300);
    assert_eq!(banners[0]["height"], 250);
    assert_eq!(banners[1]["name"], "970x250-1");
    assert_eq!(banners[1]["width"], 970);
    assert_eq!(banners[1]["height"], 250);
}

/// Test JSON output with an empty project
#[test]
fn test_list_json_empty() {
    let project = TestProject::new().unwrap();

    let output = project
        .bannerforge()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["total"], 0);
    assert!(payload["banners"].as_array().unwrap().is_empty());
}

/// Test that a directory without a size token still lists with the default
#[test]
fn test_list_falls_back_to_default_size() {
    let project = TestProject::new().unwrap();
    fs::create_dir_all(project.project_path().join("banners/holiday-special")).unwrap();

    project
        .bannerforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("holiday-special (300x250)"));
}

/// Test the list alias
#[test]
fn test_list_alias() {
    let project = TestProject::new().unwrap();
    project.add_reference_banner().unwrap();

    project
        .bannerforge()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 banner(s)"));
}
