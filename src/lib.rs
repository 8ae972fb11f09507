//! vendorgen library exports.
//!
//! Two independent pipelines:
//! - `blobs`: materialize extracted blobs into the vendor module tree
//! - `make`: serialize makefile models into AOSP build directives

pub mod blobs;
pub mod commands;
pub mod common;
pub mod config;
pub mod make;
pub mod partition;
pub mod plan;
pub mod progress;
pub mod readme;
pub mod sepolicy;
pub mod timing;
