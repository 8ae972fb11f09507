//! Generation plan: every makefile model for one device, as produced by the
//! upstream analysis.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::blobs::{BlobEntry, PartitionProps};
use crate::common::read_json;
use crate::make::{
    blob_to_file_copy, BoardMakefile, DeviceMakefile, ModulesMakefile, ProductMakefile,
    ProductsMakefile,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPlan {
    pub modules: ModulesMakefile,
    #[serde(default)]
    pub board: BoardMakefile,
    #[serde(default)]
    pub device: DeviceMakefile,
    pub product: ProductMakefile,
    /// Defaults to the single product above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductsMakefile>,
    /// Stock properties, used for the README title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_props: Option<PartitionProps>,
}

impl GenerationPlan {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    pub fn products(&self) -> ProductsMakefile {
        self.products.clone().unwrap_or_else(|| ProductsMakefile {
            products: vec![self.product.name.clone()],
        })
    }

    /// Append a `PRODUCT_COPY_FILES` item for every catalog entry.
    pub fn add_copy_files(&mut self, entries: &[BlobEntry], proprietary_dir: &str) {
        if entries.is_empty() {
            return;
        }
        self.device
            .copy_files
            .get_or_insert_with(Vec::new)
            .extend(entries.iter().map(|e| blob_to_file_copy(e, proprietary_dir)));
    }
}
