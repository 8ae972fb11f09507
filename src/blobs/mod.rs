//! Extracted vendor blobs: catalog entries, properties and materialization.

pub mod copy;
pub mod entry;
pub mod props;

pub use copy::{copy_blobs, copy_blobs_parallel, patch_xml, CopyAction, CopySummary};
pub use entry::{load_catalog, BlobEntry};
pub use props::{PartitionProps, PropMap};
