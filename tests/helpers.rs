//! Shared test utilities for vendorgen tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Test environment with temporary blob source and destination trees.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Extracted blob tree (catalog source root)
    pub src: PathBuf,
    /// Materialization destination
    pub out: PathBuf,
    /// Scratch space for files outside both trees
    pub base_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let src = base.join("src");
        let out = base.join("out");
        let base_dir = base.to_path_buf();

        fs::create_dir_all(&src).expect("Failed to create src dir");

        Self {
            _temp_dir: temp_dir,
            src,
            out,
            base_dir,
        }
    }

    /// Write a blob below the source root.
    pub fn write_blob(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.src.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create blob parent dir");
        }
        fs::write(&path, content).expect("Failed to write blob");
        path
    }

    /// Create a symlink below the source root.
    pub fn symlink_blob(&self, rel: &str, target: &str) -> PathBuf {
        let path = self.src.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create symlink parent dir");
        }
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Read a materialized file.
    pub fn read_out(&self, rel: &str) -> Vec<u8> {
        fs::read(self.out.join(rel)).unwrap_or_else(|_| panic!("Failed to read out/{}", rel))
    }
}

/// Relative path -> content of every regular file below `root`.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.expect("Failed to walk tree"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .expect("walked path outside root")
                .to_string_lossy()
                .into_owned();
            let content = fs::read(e.path()).expect("Failed to read walked file");
            (rel, content)
        })
        .collect()
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert that nothing exists at `path` (not even a dangling symlink).
pub fn assert_not_exists(path: &Path) {
    assert!(
        fs::symlink_metadata(path).is_err(),
        "Expected nothing at {}",
        path.display()
    );
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read file: {}", path.display()));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}
