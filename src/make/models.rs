//! Makefile models.
//!
//! Plain records filled in by the caller. An absent (`None`) field omits its
//! block from the generated makefile; it never renders as an empty directive.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::blobs::PartitionProps;
use crate::partition::Partition;
use crate::sepolicy::SelinuxPartResolutions;

/// A runtime symlink created by a post-install command rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symlink {
    pub module_name: String,
    pub link_partition: Partition,
    pub link_subpath: String,
    pub target_path: String,
}

/// `Android.mk` of the vendor module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulesMakefile {
    pub device: String,
    pub vendor: String,
    /// Present when radio images under `firmware/` should be registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio_files: Option<Vec<String>>,
    #[serde(default)]
    pub symlinks: Vec<Symlink>,
}

/// `BoardConfig.mk` of the vendor module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMakefile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_partitions: Option<Vec<Partition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ab_ota_partitions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sepolicy_resolutions: Option<SelinuxPartResolutions>,
}

impl BoardMakefile {
    pub fn builds(&self, partition: Partition) -> bool {
        self.build_partitions
            .as_ref()
            .is_some_and(|parts| parts.contains(&partition))
    }
}

/// `device.mk` of the vendor module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMakefile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintf_manifest_paths: Option<IndexMap<Partition, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_linker_config_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PartitionProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_rros: Option<String>,
}

/// `AndroidProducts.mk` listing the product makefiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsMakefile {
    #[serde(default)]
    pub products: Vec<String>,
}

/// `<product>.mk` defining one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMakefile {
    pub base_product_path: String,

    pub name: String,
    pub model: String,
    pub brand: String,
    pub manufacturer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_rros: Option<String>,
}
