//! Device partitions and the build-system variables keyed on them.
//!
//! The variable tables are plain data. A partition without an entry is a
//! malformed model and comes back as an error, never as a guessed name.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named image segment of the target device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    System,
    Vendor,
    Odm,
    SystemExt,
    Product,
    VendorDlkm,
    OdmDlkm,
}

impl Partition {
    pub const ALL: [Partition; 7] = [
        Partition::System,
        Partition::Vendor,
        Partition::Odm,
        Partition::SystemExt,
        Partition::Product,
        Partition::VendorDlkm,
        Partition::OdmDlkm,
    ];

    /// Identifier as used in paths and makefiles (`system_ext`, `vendor_dlkm`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Partition::System => "system",
            Partition::Vendor => "vendor",
            Partition::Odm => "odm",
            Partition::SystemExt => "system_ext",
            Partition::Product => "product",
            Partition::VendorDlkm => "vendor_dlkm",
            Partition::OdmDlkm => "odm_dlkm",
        }
    }

    /// Upper-case form used inside variable names (`SYSTEM_EXT`).
    pub fn var_suffix(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Partition::ALL.iter().find(|p| p.as_str() == s) {
            Some(p) => Ok(*p),
            None => bail!("unknown partition '{}'", s),
        }
    }
}

const SEPOLICY_PARTITION_VARS: &[(Partition, &str)] = &[
    (Partition::SystemExt, "SYSTEM_EXT_PRIVATE_SEPOLICY_DIRS"),
    (Partition::Product, "PRODUCT_PRIVATE_SEPOLICY_DIRS"),
    (Partition::Vendor, "BOARD_VENDOR_SEPOLICY_DIRS"),
    (Partition::Odm, "BOARD_ODM_SEPOLICY_DIRS"),
];

// Vendor is DEVICE_MANIFEST_FILE, singular. That is the build system's name.
const VINTF_MANIFEST_PARTITION_VARS: &[(Partition, &str)] = &[
    (Partition::SystemExt, "SYSTEM_EXT_MANIFEST_FILES"),
    (Partition::Product, "PRODUCT_MANIFEST_FILES"),
    (Partition::Vendor, "DEVICE_MANIFEST_FILE"),
    (Partition::Odm, "ODM_MANIFEST_FILES"),
];

fn lookup(
    table: &[(Partition, &'static str)],
    partition: Partition,
    what: &str,
) -> Result<&'static str> {
    match table.iter().find(|(p, _)| *p == partition) {
        Some((_, var)) => Ok(*var),
        None => bail!("no {} variable for partition '{}'", what, partition),
    }
}

/// Variable listing the sepolicy directories of a partition.
pub fn sepolicy_dirs_var(partition: Partition) -> Result<&'static str> {
    lookup(SEPOLICY_PARTITION_VARS, partition, "sepolicy dirs")
}

/// Variable listing the VINTF manifest fragments of a partition.
pub fn vintf_manifest_var(partition: Partition) -> Result<&'static str> {
    lookup(VINTF_MANIFEST_PARTITION_VARS, partition, "VINTF manifest")
}
