// Integration tests for the rawprune binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// jpg/ holds photo001, 002, 005; raw/ holds photo001..005
fn setup_test_directory() -> TempDir {
    let dir = tempdir().unwrap();
    let jpg = dir.path().join("jpg");
    let raw = dir.path().join("raw");
    fs::create_dir_all(&jpg).unwrap();
    fs::create_dir_all(&raw).unwrap();

    for name in ["photo001", "photo002", "photo005"] {
        fs::write(jpg.join(format!("{}.jpg", name)), "fake jpg content").unwrap();
    }
    for name in ["photo001", "photo002", "photo003", "photo004", "photo005"] {
        fs::write(raw.join(format!("{}.rw2", name)), "fake raw content".repeat(1000)).unwrap();
    }

    dir
}

fn pattern(dir: &Path, tail: &str) -> String {
    format!("{}/{}", glob::Pattern::escape(&dir.to_string_lossy()), tail)
}

fn raw(dir: &Path, name: &str) -> PathBuf {
    dir.join("raw").join(name)
}

fn rawprune(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rawprune").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RAWPRUNE_SINK")
        .arg("--jpg")
        .arg(pattern(dir, "jpg/*.jpg"))
        .arg("--raw")
        .arg(pattern(dir, "raw/*.rw2"));
    cmd
}

#[test]
fn test_preview_lists_orphans_and_keeps_them() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo003.rw2"))
        .stdout(predicate::str::contains("photo004.rw2"))
        .stdout(predicate::str::contains("photo001.rw2").not())
        .stdout(predicate::str::contains("Total: 2 files, 0.03 MB"))
        .stdout(predicate::str::contains("--delete"));

    assert!(raw(dir.path(), "photo003.rw2").exists());
    assert!(raw(dir.path(), "photo004.rw2").exists());
}

#[test]
fn test_delete_with_yes_removes_only_orphans() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .arg("--delete")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 2 deleted, 0 failed"));

    assert!(!raw(dir.path(), "photo003.rw2").exists());
    assert!(!raw(dir.path(), "photo004.rw2").exists());
    for kept in ["photo001.rw2", "photo002.rw2", "photo005.rw2"] {
        assert!(raw(dir.path(), kept).exists());
    }
}

#[test]
fn test_delete_confirmed_on_stdin() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .arg("--delete")
        .write_stdin("maybe\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please answer"));

    assert!(!raw(dir.path(), "photo003.rw2").exists());
}

#[test]
fn test_delete_declined_keeps_files() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .arg("--delete")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(raw(dir.path(), "photo003.rw2").exists());
    assert!(raw(dir.path(), "photo004.rw2").exists());
}

#[test]
fn test_legacy_flag_names() {
    let dir = setup_test_directory();

    Command::cargo_bin("rawprune")
        .unwrap()
        .env("NO_COLOR", "1")
        .env_remove("RAWPRUNE_SINK")
        .arg("--jpg-dir")
        .arg(pattern(dir.path(), "jpg/*.jpg"))
        .arg("--raw-dir")
        .arg(pattern(dir.path(), "raw/*.rw2"))
        .arg("--delete")
        .arg("--auto-confirm")
        .assert()
        .success();

    assert!(!raw(dir.path(), "photo004.rw2").exists());
}

#[test]
fn test_no_jpeg_match_fails_without_touching_raw() {
    let dir = setup_test_directory();

    Command::cargo_bin("rawprune")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg("--jpg")
        .arg(pattern(dir.path(), "jpg/*.jpeg"))
        .arg("--raw")
        .arg(pattern(dir.path(), "raw/*.rw2"))
        .arg("--delete")
        .arg("--yes")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No JPEG files match"));

    assert!(raw(dir.path(), "photo001.rw2").exists());
    assert!(raw(dir.path(), "photo003.rw2").exists());
}

#[test]
fn test_nothing_to_remove() {
    let dir = setup_test_directory();
    fs::remove_file(raw(dir.path(), "photo003.rw2")).unwrap();
    fs::remove_file(raw(dir.path(), "photo004.rw2")).unwrap();

    rawprune(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));
}

#[test]
fn test_unknown_env_sink_falls_back_to_delete() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .env("RAWPRUNE_SINK", "bogus")
        .arg("--delete")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring RAWPRUNE_SINK=bogus"))
        .stdout(predicate::str::contains("Done: 2 deleted"));

    assert!(!raw(dir.path(), "photo003.rw2").exists());
}

#[test]
fn test_env_sink_selects_trash() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .env("RAWPRUNE_SINK", "trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("RAW files to be trashed:"))
        .stdout(predicate::str::contains("Ignoring").not());

    assert!(raw(dir.path(), "photo003.rw2").exists());
}

#[test]
fn test_sink_flag_overrides_env() {
    let dir = setup_test_directory();

    rawprune(dir.path())
        .env("RAWPRUNE_SINK", "trash")
        .arg("--sink")
        .arg("delete")
        .assert()
        .success()
        .stdout(predicate::str::contains("RAW files to be deleted:"));
}

#[test]
fn test_hidden_raw_files_are_left_alone() {
    let dir = setup_test_directory();
    let hidden = raw(dir.path(), "._photo001.rw2");
    fs::write(&hidden, "resource fork").unwrap();

    rawprune(dir.path())
        .arg("--delete")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 2 deleted"));

    assert!(hidden.exists());
}

#[test]
fn test_help_display() {
    Command::cargo_bin("rawprune")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--jpg"))
        .stdout(predicate::str::contains("--raw"))
        .stdout(predicate::str::contains("--sink"));
}
