//! Integration tests for the filesystem probe

use prims_core::{which, which_with, PathProbe, StdProbe};
use std::fs;

#[test]
fn test_which_file_and_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("tool");
    fs::write(&file, "#!/bin/sh\n").unwrap();

    let file = file.to_string_lossy().to_string();
    let dir_path = dir.path().to_string_lossy().to_string();

    assert_eq!(which(&file), file);
    assert_eq!(which(&dir_path), dir_path);
}

#[test]
fn test_which_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing-here").to_string_lossy().to_string();
    assert_eq!(which(&missing), "");
}

#[test]
fn test_which_is_idempotent_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_string_lossy().to_string();
    assert_eq!(which(&path), which(&path));
}

#[cfg(unix)]
#[test]
fn test_which_dangling_symlink_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink(dir.path().join("target"), &link).unwrap();
    assert_eq!(which(&link.to_string_lossy()), "");
}

struct DenyAll;

impl PathProbe for DenyAll {
    fn exists(&self, _path: &str) -> bool {
        false
    }
}

#[test]
fn test_which_with_probe_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_string_lossy().to_string();
    assert_eq!(which_with(&StdProbe, &path), path);
    assert_eq!(which_with(&DenyAll, &path), "");
}
