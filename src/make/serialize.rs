//! Makefile serializers.
//!
//! Pure functions from a model (and optional device config) to makefile text.
//! Identical inputs always give identical output.

use anyhow::Result;
use indexmap::IndexSet;

use super::blocks::{join_cont, Blocks};
use super::models::{BoardMakefile, DeviceMakefile, ModulesMakefile, ProductMakefile, ProductsMakefile};
use crate::config::DeviceConfig;
use crate::config::device::DEFAULT_FS_TYPE;
use crate::partition::{sepolicy_dirs_var, vintf_manifest_var, Partition};

const RADIO_FILES_BLOCK: &str = "RADIO_FILES := $(wildcard $(LOCAL_PATH)/firmware/*.img)
$(foreach f, $(notdir $(RADIO_FILES)),$(call add-radio-file,firmware/$(f)))";

fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((dir, _)) => dir,
        None => ".",
    }
}

/// Serialize the module makefile (`Android.mk`).
///
/// Radio images and device symlinks are guarded by a `TARGET_DEVICE` check.
/// With neither present there is nothing to guard and only the header is
/// emitted.
pub fn serialize_modules_makefile(mk: &ModulesMakefile) -> String {
    let mut blocks = Blocks::new();
    if mk.radio_files.is_none() && mk.symlinks.is_empty() {
        return blocks.finish();
    }

    blocks.push("LOCAL_PATH := $(call my-dir)");
    blocks.push(format!("ifeq ($(TARGET_DEVICE),{})", mk.device));

    if mk.radio_files.is_some() {
        blocks.push(RADIO_FILES_BLOCK);
    }

    if !mk.symlinks.is_empty() {
        let mut mkdir_cmds = IndexSet::new();
        let mut link_cmds = Vec::with_capacity(mk.symlinks.len());
        for link in &mk.symlinks {
            let dest_path = format!("$(PRODUCT_OUT)/{}/{}", link.link_partition, link.link_subpath);
            mkdir_cmds.insert(format!("mkdir -p {};", parent_dir(&dest_path)));
            link_cmds.push(format!("ln -sf {} {};", link.target_path, dest_path));
        }
        let mkdir_cmds: Vec<String> = mkdir_cmds.into_iter().collect();

        blocks.push(format!(
            "include $(CLEAR_VARS)
LOCAL_MODULE := device_symlinks
LOCAL_MODULE_CLASS := ETC
LOCAL_MODULE_TAGS := optional
LOCAL_MODULE_OWNER := {vendor}
LOCAL_MODULE_PATH := $(TARGET_OUT_VENDOR_ETC)
LOCAL_MODULE_STEM := .device_symlinks
LOCAL_SRC_FILES := Android.mk
LOCAL_POST_INSTALL_CMD := \\
    {mkdirs} \\
    {links}
include $(BUILD_PREBUILT)",
            vendor = mk.vendor,
            mkdirs = join_cont(&mkdir_cmds),
            links = join_cont(&link_cmds),
        ));
    }

    blocks.push("endif");
    blocks.finish()
}

/// Serialize the board makefile (`BoardConfig.mk`).
///
/// Fails only when a partition in the sepolicy resolutions has no
/// sepolicy-dirs variable.
pub fn serialize_board_makefile(mk: &BoardMakefile, config: Option<&DeviceConfig>) -> Result<String> {
    let mut blocks = Blocks::new();
    let fs_type = config.map_or(DEFAULT_FS_TYPE, DeviceConfig::fs_type);

    if mk.builds(Partition::Vendor) {
        blocks.push(format!("BOARD_VENDORIMAGE_FILE_SYSTEM_TYPE := {}", fs_type));
    }

    if mk.builds(Partition::VendorDlkm) {
        blocks.push(format!(
            "BOARD_USES_VENDOR_DLKMIMAGE := true
BOARD_VENDOR_DLKMIMAGE_FILE_SYSTEM_TYPE := {}
TARGET_COPY_OUT_VENDOR_DLKM := vendor_dlkm",
            fs_type
        ));
    }
    if mk.builds(Partition::OdmDlkm) {
        // AOSP reads ODM_DLKMIMAGE. The ODM_DLKIMAGE spelling some generators
        // emit is silently ignored by the build.
        blocks.push(format!(
            "BOARD_USES_ODM_DLKMIMAGE := true
BOARD_ODM_DLKMIMAGE_FILE_SYSTEM_TYPE := {}
TARGET_COPY_OUT_ODM_DLKM := odm_dlkm",
            fs_type
        ));
    }

    blocks.push_opt_list("AB_OTA_PARTITIONS", mk.ab_ota_partitions.as_deref());

    if let Some(board_info) = &mk.board_info {
        blocks.push(format!("TARGET_BOARD_INFO_FILE := {}", board_info));
    }

    if let Some(resolutions) = &mk.sepolicy_resolutions {
        for (partition, res) in resolutions.iter() {
            if !res.sepolicy_dirs.is_empty() {
                blocks.push_list(sepolicy_dirs_var(*partition)?, &res.sepolicy_dirs);
            }

            if !res.missing_contexts.is_empty() {
                blocks.push(
                    res.missing_contexts
                        .iter()
                        .map(|ctx| format!("# Missing {} SELinux context: {}", partition, ctx))
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
            }
        }
    }

    Ok(blocks.finish())
}

/// Serialize the device makefile (`device.mk`).
///
/// Fails only when a VINTF manifest is given for a partition without a
/// manifest variable.
pub fn serialize_device_makefile(mk: &DeviceMakefile) -> Result<String> {
    let mut blocks = Blocks::new();

    blocks.push_opt_list("PRODUCT_SOONG_NAMESPACES", mk.namespaces.as_deref());

    if let Some(manifests) = &mk.vintf_manifest_paths {
        for (partition, manifest_path) in manifests.iter() {
            blocks.push(format!("{} += {}", vintf_manifest_var(*partition)?, manifest_path));
        }
    }

    if let Some(path) = &mk.vendor_linker_config_path {
        blocks.push(format!("PRODUCT_VENDOR_LINKER_CONFIG_FRAGMENTS += {}", path));
    }

    if let Some(props) = &mk.props {
        for (partition, part_props) in props.iter() {
            let lines: Vec<String> = part_props.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            blocks.push_list(&format!("PRODUCT_{}_PROPERTIES", partition.var_suffix()), &lines);
        }
    }

    if let Some(fingerprint) = &mk.fingerprint {
        blocks.push(format!("PRODUCT_OVERRIDE_FINGERPRINT := {}", fingerprint));
    }

    if let Some(rros) = &mk.enforce_rros {
        blocks.push(format!("PRODUCT_ENFORCE_RRO_TARGETS := {}", rros));
    }

    blocks.push_opt_list("PRODUCT_PACKAGES", mk.packages.as_deref());
    blocks.push_opt_list("PRODUCT_COPY_FILES", mk.copy_files.as_deref());

    Ok(blocks.finish())
}

/// Serialize one product makefile (`<product>.mk`).
pub fn serialize_product_makefile(mk: &ProductMakefile, config: Option<&DeviceConfig>) -> String {
    let mut blocks = Blocks::new();

    blocks.push(format!(
        "# Inherit AOSP product
$(call inherit-product, {})",
        mk.base_product_path
    ));

    blocks.push(format!(
        "# Match stock product info
PRODUCT_NAME := {}
PRODUCT_MODEL := {}
PRODUCT_BRAND := {}
PRODUCT_MANUFACTURER := {}",
        mk.name, mk.model, mk.brand, mk.manufacturer
    ));

    if let Some(rros) = &mk.enforce_rros {
        blocks.push(format!("PRODUCT_ENFORCE_RRO_TARGETS := {}", rros));
    }

    let Some(config) = config else {
        return blocks.finish();
    };

    for extra in &config.platform.extra_product_makefiles {
        blocks.push(format!("include {}", extra));
    }

    if let Some(build_id) = &config.device.build_id {
        blocks.push(format!(
            "ifneq ($(BUILD_ID),{id})
  $(error BUILD_ID: expected {id}, got $(BUILD_ID))
endif",
            id = build_id
        ));
    }

    if let Some(spl) = &config.device.platform_security_patch_level_override {
        blocks.push(format!(
            "ifneq ($(PLATFORM_SECURITY_PATCH),{spl})
  $(error PLATFORM_SECURITY_PATCH: expected {spl}, got $(PLATFORM_SECURITY_PATCH))
endif",
            spl = spl
        ));
    }

    blocks.finish()
}

/// Serialize the product list (`AndroidProducts.mk`).
pub fn serialize_products_makefile(mk: &ProductsMakefile) -> String {
    let mut blocks = Blocks::new();

    let paths: Vec<String> = mk.products.iter().map(|p| format!("$(LOCAL_DIR)/{}.mk", p)).collect();
    blocks.push_list("PRODUCT_MAKEFILES", &paths);

    blocks.finish()
}
