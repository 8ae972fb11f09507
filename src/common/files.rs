//! File helpers that create parent directories on demand.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create all parent directories of `path`.
///
/// Idempotent: an existing directory (including one created concurrently by
/// another worker) is not an error.
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Write a file, creating parent directories as needed.
///
/// This is a convenience function that combines creating the parent directory
/// with writing the file content, eliminating the common pattern of:
/// ```ignore
/// if let Some(parent) = path.parent() {
///     fs::create_dir_all(parent)?;
/// }
/// fs::write(path, content)?;
/// ```
pub fn write_file_with_dirs<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_exists(path)?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read and deserialize a JSON document.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
