//! Copy command - materializes catalog blobs into the vendor tree.

use anyhow::{bail, Result};
use std::path::Path;

use crate::blobs::{copy_blobs_parallel, load_catalog, CopySummary};
use crate::progress::ConsoleProgress;
use crate::timing::Timer;

/// Execute the copy command.
pub fn cmd_copy(catalog: &Path, src_dir: &Path, out_dir: &Path, jobs: usize) -> Result<CopySummary> {
    if !src_dir.is_dir() {
        bail!("Blob source directory not found: {}", src_dir.display());
    }

    let entries = load_catalog(catalog)?;
    println!(
        "=== Materializing {} blobs into {} ===",
        entries.len(),
        out_dir.display()
    );

    let timer = Timer::start("Copying files");
    let progress = ConsoleProgress::new();
    let summary = copy_blobs_parallel(&entries, src_dir, out_dir, jobs.max(1), &progress)?;
    timer.finish();

    println!(
        "  {} copied, {} patched, {} symlinks skipped",
        summary.copied, summary.patched, summary.skipped
    );
    Ok(summary)
}
