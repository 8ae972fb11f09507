//! SELinux resolution results consumed by the board makefile.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// Policy directories and unresolved contexts for one partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepolicyPartResolution {
    #[serde(default)]
    pub sepolicy_dirs: Vec<String>,
    /// Contexts referenced by the stock image but not found in any policy.
    #[serde(default)]
    pub missing_contexts: IndexSet<String>,
}

impl SepolicyPartResolution {
    /// Record a missing context once, keeping first-seen order.
    pub fn add_missing_context(&mut self, context: &str) {
        self.missing_contexts.insert(context.to_string());
    }
}

pub type SelinuxPartResolutions = IndexMap<Partition, SepolicyPartResolution>;
