//! End-to-end init / render flows: scaffolding a fresh project and turning a
//! hand-written manifest into README.md.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn shelf_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shelf"));
    cmd.env("HOME", home).env("USERPROFILE", home);
    cmd
}

fn make_project_dir(workspace: &TempDir, name: &str) -> PathBuf {
    let root = workspace.path().join(name);
    fs::create_dir_all(&root).expect("mkdir");
    root
}

#[test]
fn init_scaffolds_manifest_and_readme() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "fresh");

    shelf_cmd(home.path())
        .arg("init")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(contains("Created package.shelf.json"))
        .stdout(contains("Created README.md"));

    let manifest = fs::read_to_string(root.join("package.shelf.json")).expect("manifest");
    assert!(manifest.contains("\"name\": \"fresh\""));
    assert!(manifest.contains("example_function"));

    let readme = fs::read_to_string(root.join("README.md")).expect("readme");
    assert!(readme.starts_with("# fresh\n"));
    assert!(readme.contains("shelf -c fresh"));
}

#[test]
fn init_leaves_existing_files_untouched() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "fresh");
    fs::write(root.join("package.shelf.json"), "{\"name\": \"custom\"}").expect("manifest");
    fs::write(root.join("README.md"), "hands off\n").expect("readme");

    shelf_cmd(home.path())
        .arg("init")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(contains("package.shelf.json already exists"))
        .stdout(contains("README.md already exists"));

    assert_eq!(
        fs::read_to_string(root.join("package.shelf.json")).expect("manifest"),
        "{\"name\": \"custom\"}"
    );
    assert_eq!(
        fs::read_to_string(root.join("README.md")).expect("readme"),
        "hands off\n"
    );
}

#[test]
fn render_writes_readme_from_manifest() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "demo");
    fs::write(
        root.join("package.shelf.json"),
        r#"{"name": "demo", "description": "A demo.", "functions": [{"name": "f", "parameters": ["a", "b"]}]}"#,
    )
    .expect("manifest");

    shelf_cmd(home.path())
        .arg("-r")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(contains("Rendered package.shelf.json to README.md"));

    let readme = fs::read_to_string(root.join("README.md")).expect("readme");
    assert!(readme.starts_with("# demo\n"));
    assert!(readme.contains("A demo."));
    assert!(readme.contains("| f | a, b | `` |  |"));
}

#[test]
fn render_overwrites_prior_readme() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "demo");
    fs::write(root.join("package.shelf.json"), r#"{"name": "demo"}"#).expect("manifest");
    fs::write(root.join("README.md"), "old content\n").expect("readme");

    shelf_cmd(home.path())
        .arg("-r")
        .current_dir(&root)
        .assert()
        .success();

    let readme = fs::read_to_string(root.join("README.md")).expect("readme");
    assert!(!readme.contains("old content"));
    assert!(readme.starts_with("# demo\n"));
}

#[test]
fn render_without_manifest_fails() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "demo");

    shelf_cmd(home.path())
        .arg("-r")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(contains("package.shelf.json"));
    assert!(!root.join("README.md").exists());
}

#[test]
fn render_with_malformed_manifest_fails() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "demo");
    fs::write(root.join("package.shelf.json"), "{broken").expect("manifest");

    shelf_cmd(home.path())
        .arg("-r")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(contains("package.shelf.json"));
}

#[test]
fn init_then_save_then_checkout_roundtrip() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let root = make_project_dir(&workspace, "full-cycle");

    shelf_cmd(home.path())
        .arg("init")
        .current_dir(&root)
        .assert()
        .success();
    shelf_cmd(home.path())
        .arg("-s")
        .current_dir(&root)
        .assert()
        .success();

    let target = TempDir::new().expect("target");
    shelf_cmd(home.path())
        .args(["-c", "full-cycle"])
        .current_dir(target.path())
        .assert()
        .success();

    let restored = target.path().join("full-cycle");
    assert!(restored.join("package.shelf.json").exists());
    assert!(restored.join("README.md").exists());
}
