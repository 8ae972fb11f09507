//! Shared utilities across vendorgen modules.

pub mod files;

pub use files::{ensure_parent_exists, read_json, write_file_with_dirs};
