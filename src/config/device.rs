//! Per-device configuration consumed by the makefile serializers.
//!
//! Loading and validation of the full device config belong to the caller;
//! only the fields read here are modeled. Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::common::read_json;

/// Filesystem type used when the device config does not name one.
pub const DEFAULT_FS_TYPE: &str = "ext4";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub device: DeviceSection,
    #[serde(default)]
    pub platform: PlatformSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceSection {
    /// Device codename.
    pub name: Option<String>,
    pub system_fs_type: Option<String>,
    /// Expected `BUILD_ID`; the product makefile refuses to build otherwise.
    pub build_id: Option<String>,
    pub platform_security_patch_level_override: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformSection {
    #[serde(default)]
    pub extra_product_makefiles: Vec<String>,
}

impl DeviceConfig {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    pub fn fs_type(&self) -> &str {
        self.device.system_fs_type.as_deref().unwrap_or(DEFAULT_FS_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_parses() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"device": {"name": "raven", "build_id": "TQ3A.230901.001"}, "unrelated": 1}"#,
        )
        .unwrap();

        assert_eq!(config.device.name.as_deref(), Some("raven"));
        assert_eq!(config.device.build_id.as_deref(), Some("TQ3A.230901.001"));
        assert!(config.platform.extra_product_makefiles.is_empty());
        assert_eq!(config.fs_type(), "ext4");
    }

    #[test]
    fn test_fs_type_override() {
        let config: DeviceConfig =
            serde_json::from_str(r#"{"device": {"system_fs_type": "erofs"}}"#).unwrap();
        assert_eq!(config.fs_type(), "erofs");
    }
}
