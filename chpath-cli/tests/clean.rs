//! End-to-end tests for the cleaning pipeline through the binary.
//!
//! These exercise --path, prepend arguments, verbosity, and symlink
//! handling against real temporary directories. The list separator and
//! symlink fixtures are Unix-specific.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;
use tempfile::{tempdir, TempDir};

fn chpath() -> Command {
    let mut cmd = Command::cargo_bin("chpath").expect("Failed to find chpath binary");
    // Keep the environment from flipping the default log level
    cmd.env_remove("CHPATH_LOG_MODE");
    cmd
}

/// Create `names` as directories under a fresh tempdir, returning their
/// entry strings.
fn make_dirs(dir: &TempDir, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            fs::create_dir(&path).unwrap();
            path.to_str().unwrap().to_string()
        })
        .collect()
}

#[test]
fn test_clean_valid_path_passes_through() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["a", "b"]);
    let raw = entries.join(":");

    chpath()
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{raw}\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_clean_drops_duplicates_and_missing() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["bin"]);
    let missing = dir.path().join("gone").to_str().unwrap().to_string();
    let raw = format!("{0}:{0}:{1}", entries[0], missing);

    chpath()
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{}\n", entries[0]))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_warns_per_skipped_entry() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["bin"]);
    let missing = dir.path().join("gone").to_str().unwrap().to_string();
    let raw = format!("{0}:{0}:{1}", entries[0], missing);

    chpath()
        .arg("--verbose")
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{}\n", entries[0]))
        .stderr(predicate::str::contains("multiply defined"))
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn test_prepend_arguments_come_first() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["existing", "extra"]);
    let raw = entries[0].clone();

    chpath()
        .arg("--path")
        .arg(&raw)
        .arg(&entries[1])
        .assert()
        .success()
        .stdout(format!("{}:{}\n", entries[1], entries[0]));
}

#[test]
fn test_non_directory_entry_rejected() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["bin"]);
    let file = dir.path().join("tool");
    fs::write(&file, "").unwrap();
    let raw = format!("{}:{}", entries[0], file.to_str().unwrap());

    chpath()
        .arg("-v")
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{}\n", entries[0]))
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_symlink_alias_collapses_by_default() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["target"]);
    let link = dir.path().join("link");
    symlink(&entries[0], &link).unwrap();
    let link_entry = link.to_str().unwrap().to_string();
    let raw = format!("{}:{}", link_entry, entries[0]);

    // The symlink spelling came first, so it is what survives
    chpath()
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{link_entry}\n"));
}

#[test]
fn test_keep_symlinks_preserves_alias() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["target"]);
    let link = dir.path().join("link");
    symlink(&entries[0], &link).unwrap();
    let raw = format!("{}:{}", link.to_str().unwrap(), entries[0]);

    chpath()
        .arg("--keep-symlinks")
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{raw}\n"));
}

#[test]
fn test_keepsymlinks_alias_accepted() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["bin"]);

    chpath()
        .arg("--keepsymlinks")
        .arg("--path")
        .arg(&entries[0])
        .assert()
        .success()
        .stdout(format!("{}\n", entries[0]));
}

#[test]
fn test_dangling_symlink_dropped() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["bin"]);
    let dangling = dir.path().join("dangling");
    symlink(dir.path().join("gone"), &dangling).unwrap();
    let raw = format!("{}:{}", entries[0], dangling.to_str().unwrap());

    chpath()
        .arg("--path")
        .arg(&raw)
        .assert()
        .success()
        .stdout(format!("{}\n", entries[0]));
}

#[test]
fn test_empty_path_produces_empty_line() {
    chpath()
        .arg("--path")
        .arg("")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_output_is_a_fixed_point() {
    let dir = tempdir().unwrap();
    let entries = make_dirs(&dir, &["a", "b"]);
    let link = dir.path().join("link");
    symlink(&entries[0], &link).unwrap();
    let raw = format!("{}:{}:{}", entries[0], link.to_str().unwrap(), entries[1]);

    let first = chpath().arg("--path").arg(&raw).assert().success();
    let cleaned = String::from_utf8(first.get_output().stdout.clone()).unwrap();
    let cleaned = cleaned.trim_end_matches('\n').to_string();

    chpath()
        .arg("--path")
        .arg(&cleaned)
        .assert()
        .success()
        .stdout(format!("{cleaned}\n"));
}
