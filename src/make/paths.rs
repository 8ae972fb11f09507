//! Build-system path references for partition files.

use crate::blobs::BlobEntry;
use crate::partition::Partition;

/// `$(PRODUCT_OUT)/...` for system, `$(TARGET_COPY_OUT_<PART>)/...` otherwise.
pub fn part_path_to_make_path(partition: Partition, subpath: &str) -> String {
    let copy_part = match partition {
        Partition::System => "PRODUCT_OUT".to_string(),
        other => format!("TARGET_COPY_OUT_{}", other.var_suffix()),
    };
    format!("$({})/{}", copy_part, subpath)
}

/// `PRODUCT_COPY_FILES` item installing one blob.
pub fn blob_to_file_copy(entry: &BlobEntry, proprietary_dir: &str) -> String {
    let dest_path = part_path_to_make_path(entry.partition, &entry.path);
    format!("{}/{}:{}", proprietary_dir, entry.src_path, dest_path)
}
