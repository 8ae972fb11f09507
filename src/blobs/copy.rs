//! Blob materialization: copy (or patch) catalog entries into the vendor tree.
//!
//! Each entry is handled independently:
//! - symlinked sources are skipped; the generated makefiles recreate them
//! - vendor XML with a known quirk is rewritten
//! - everything else is copied byte for byte
//!
//! Any I/O error aborts the run. Re-running over the same inputs produces
//! the same tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use super::entry::BlobEntry;
use crate::common::ensure_parent_exists;
use crate::progress::Progress;

const XML_V2_DECL: &[u8] = b"<?xml version=\"2.0\"";
const XML_V1_DECL: &[u8] = b"<?xml version=\"1.0\"";

/// What happened to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// Source is a symlink, nothing written.
    SkippedSymlink,
    /// Patched XML written.
    Patched,
    /// Verbatim copy.
    Copied,
}

/// Per-action counts for a whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub patched: usize,
    pub skipped: usize,
}

impl CopySummary {
    fn record(&mut self, action: CopyAction) {
        match action {
            CopyAction::SkippedSymlink => self.skipped += 1,
            CopyAction::Patched => self.patched += 1,
            CopyAction::Copied => self.copied += 1,
        }
    }
}

/// Fix up vendor XML that the build's XML parsers reject.
///
/// Two quirks are known:
/// - a `version="2.0"` declaration, rewritten to `1.0`
/// - a C-style `/* ... */` license header, turned into an XML comment
///
/// Returns `None` when neither applies and the file should be copied as is.
pub fn patch_xml(content: &[u8]) -> Option<Vec<u8>> {
    if content.starts_with(XML_V2_DECL) {
        let mut patched = Vec::with_capacity(content.len());
        patched.extend_from_slice(XML_V1_DECL);
        patched.extend_from_slice(&content[XML_V2_DECL.len()..]);
        return Some(patched);
    }

    if content.starts_with(b"/*") {
        let lines: Vec<&[u8]> = content
            .split(|&b| b == b'\n')
            .map(|line| match line {
                b"/*" => b"<!--".as_slice(),
                b" */" => b"-->".as_slice(),
                other => other,
            })
            .collect();
        return Some(lines.join(&b'\n'));
    }

    None
}

/// Materialize a single entry.
pub fn materialize_entry(entry: &BlobEntry, src_dir: &Path, dest_dir: &Path) -> Result<CopyAction> {
    let src_path = entry.source_path(src_dir);
    let out_path = entry.dest_path(dest_dir);

    let meta = fs::symlink_metadata(&src_path)
        .with_context(|| format!("Failed to stat {}", src_path.display()))?;
    if meta.file_type().is_symlink() {
        debug!(src = %entry.src_path, "skipping symlink");
        return Ok(CopyAction::SkippedSymlink);
    }

    ensure_parent_exists(&out_path)?;

    if entry.is_xml() {
        let content =
            fs::read(&src_path).with_context(|| format!("Failed to read {}", src_path.display()))?;
        if let Some(patched) = patch_xml(&content) {
            fs::write(&out_path, patched)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            debug!(src = %entry.src_path, "patched XML");
            return Ok(CopyAction::Patched);
        }
    }

    fs::copy(&src_path, &out_path).with_context(|| {
        format!("Failed to copy {} to {}", src_path.display(), out_path.display())
    })?;
    debug!(src = %entry.src_path, "copied");
    Ok(CopyAction::Copied)
}

/// Materialize every entry in catalog order, stopping at the first failure.
pub fn copy_blobs(
    entries: &[BlobEntry],
    src_dir: &Path,
    dest_dir: &Path,
    progress: &dyn Progress,
) -> Result<CopySummary> {
    progress.begin("Copying files");

    let mut summary = CopySummary::default();
    for entry in entries {
        progress.entry(&entry.src_path);
        match materialize_entry(entry, src_dir, dest_dir) {
            Ok(action) => summary.record(action),
            Err(e) => {
                progress.abort();
                return Err(e);
            }
        }
    }

    progress.finish();
    Ok(summary)
}

/// Like [`copy_blobs`], with at most `jobs` entries in flight.
///
/// Entries are started (and reported) in catalog order. The first failure
/// stops new work from being scheduled and is returned.
pub fn copy_blobs_parallel(
    entries: &[BlobEntry],
    src_dir: &Path,
    dest_dir: &Path,
    jobs: usize,
    progress: &dyn Progress,
) -> Result<CopySummary> {
    if jobs <= 1 {
        return copy_blobs(entries, src_dir, dest_dir, progress);
    }

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let result = rt.block_on(async {
        progress.begin("Copying files");

        let permits = Arc::new(Semaphore::new(jobs));
        let mut tasks = JoinSet::new();
        let mut summary = CopySummary::default();
        let src_dir: Arc<PathBuf> = Arc::new(src_dir.to_path_buf());
        let dest_dir: Arc<PathBuf> = Arc::new(dest_dir.to_path_buf());

        for entry in entries {
            let permit = permits
                .clone()
                .acquire_owned()
                .await
                .context("Copy worker pool closed")?;

            while let Some(done) = tasks.try_join_next() {
                summary.record(done.context("Copy worker panicked")??);
            }

            progress.entry(&entry.src_path);
            let entry = entry.clone();
            let src_dir = Arc::clone(&src_dir);
            let dest_dir = Arc::clone(&dest_dir);
            tasks.spawn_blocking(move || {
                let _permit = permit;
                materialize_entry(&entry, &src_dir, &dest_dir)
            });
        }

        while let Some(done) = tasks.join_next().await {
            summary.record(done.context("Copy worker panicked")??);
        }

        Ok::<_, anyhow::Error>(summary)
    });

    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abort(),
    }
    result
}
