//! Catalog entries describing one extracted blob.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::read_json;
use crate::partition::Partition;

/// One source file destined for the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobEntry {
    /// Path relative to the blob source root. The file lands at the same
    /// relative path below the destination root.
    pub src_path: String,
    /// Path relative to the partition root on the device.
    pub path: String,
    pub partition: Partition,
    /// Physical source when the file does not live under the source root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_src_path: Option<PathBuf>,
}

impl BlobEntry {
    pub fn new(partition: Partition, path: &str, src_path: &str) -> Self {
        Self {
            src_path: src_path.to_string(),
            path: path.to_string(),
            partition,
            disk_src_path: None,
        }
    }

    pub fn with_disk_src_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_src_path = Some(path.into());
        self
    }

    /// Where the bytes are read from.
    pub fn source_path(&self, src_dir: &Path) -> PathBuf {
        match &self.disk_src_path {
            Some(path) => path.clone(),
            None => src_dir.join(&self.src_path),
        }
    }

    /// Where the bytes are written to.
    pub fn dest_path(&self, dest_dir: &Path) -> PathBuf {
        dest_dir.join(&self.src_path)
    }

    /// Vendor XML files that may need patching before the build accepts them.
    pub fn is_xml(&self) -> bool {
        self.path.ends_with(".xml")
    }
}

/// Load a catalog (JSON array of entries), preserving its order.
pub fn load_catalog(path: &Path) -> Result<Vec<BlobEntry>> {
    read_json(path)
}
