//! Integration tests for the review command

use predicates::prelude::*;
use std::fs;

mod common;
use common::{FileAssert, TestProject};

/// Test building the review page over two compiled banners
#[test]
fn test_review_builds_page() {
    let project = TestProject::new().unwrap();
    project.add_compiled_banner("300x250-1").unwrap();
    project.add_compiled_banner("728x90-1").unwrap();

    project
        .bannerforge()
        .arg("review")
        .assert()
        .success()
        .stdout(predicate::str::contains("Review page generated"))
        .stdout(predicate::str::contains("(2 banners)"));

    let page = project.review_path().join("index.html");
    FileAssert::exists(&page);

    let html = fs::read_to_string(&page).unwrap();
    // Project heading and metadata line.
    assert!(html.contains("Acme Summer Campaign"));
    assert!(html.contains("Project: 25027-acme-summer"));
    // The embedded inventory drives the viewer.
    assert!(html.contains("\"name\": \"300x250-1\""));
    assert!(html.contains("\"width\": 300"));
    assert!(html.contains("\"name\": \"728x90-1\""));
    assert!(html.contains("\"path\": \"banners/728x90-1\""));
}

/// Test that review fails cleanly when the build output is missing
#[test]
fn test_review_requires_compiled_tree() {
    let project = TestProject::new().unwrap();

    project
        .bannerforge()
        .arg("review")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Review directory not found"));
}

/// Test that an empty review tree still renders a page
#[test]
fn test_review_renders_empty_state() {
    let project = TestProject::new().unwrap();
    fs::create_dir_all(project.review_path().join("banners")).unwrap();

    project
        .bannerforge()
        .arg("review")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 banners)"));

    let html = fs::read_to_string(project.review_path().join("index.html")).unwrap();
    assert!(html.contains("const BANNERS = []"));
}

/// Test that rebuilding the page picks up new banners
#[test]
fn test_review_rebuild_reflects_new_banners() {
    let project = TestProject::new().unwrap();
    project.add_compiled_banner("300x250-1").unwrap();

    project.bannerforge().arg("review").assert().success();
    let first = fs::read_to_string(project.review_path().join("index.html")).unwrap();
    assert!(!first.contains("\"name\": \"160x600-1\""));

    project.add_compiled_banner("160x600-1").unwrap();
    project.bannerforge().arg("review").assert().success();
    let second = fs::read_to_string(project.review_path().join("index.html")).unwrap();
    assert!(second.contains("\"name\": \"160x600-1\""));
}

/// Test that private directories in the review tree are not listed
#[test]
fn test_review_skips_private_dirs() {
    let project = TestProject::new().unwrap();
    project.add_compiled_banner("300x250-1").unwrap();
    fs::create_dir_all(project.review_path().join("banners/_scratch")).unwrap();

    project
        .bannerforge()
        .arg("review")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 banners)"));

    let html = fs::read_to_string(project.review_path().join("index.html")).unwrap();
    assert!(!html.contains("_scratch"));
}
