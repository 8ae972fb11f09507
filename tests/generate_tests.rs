//! End-to-end vendor module generation.

mod helpers;

use helpers::{assert_file_contains, assert_file_exists, TestEnv};
use std::fs;
use vendorgen::commands::generate::{
    BOARD_MAKEFILE, DEVICE_MAKEFILE, MODULES_MAKEFILE, PRODUCTS_MAKEFILE, README,
};
use vendorgen::commands::{cmd_generate, write_vendor_module, GenerateArgs};
use vendorgen::config::{Config, DeviceConfig};
use vendorgen::plan::GenerationPlan;

const PLAN: &str = r#"{
    "modules": {
        "device": "raven",
        "vendor": "google_devices",
        "symlinks": [
            {"moduleName": "libfoo", "linkPartition": "vendor", "linkSubpath": "lib64/libfoo.so", "targetPath": "/vendor/lib64/libfoo.so.1"}
        ]
    },
    "board": {
        "buildPartitions": ["vendor"],
        "sepolicyResolutions": {
            "vendor": {"sepolicyDirs": ["device/google/raven/sepolicy"], "missingContexts": []}
        }
    },
    "device": {
        "props": {"vendor": {"ro.vendor.a": "1"}, "system": {}}
    },
    "product": {
        "baseProductPath": "$(SRC_TARGET_DIR)/product/generic.mk",
        "name": "aosp_raven",
        "model": "Pixel 6 Pro",
        "brand": "google",
        "manufacturer": "Google"
    },
    "stockProps": {
        "product": {
            "ro.product.product.manufacturer": "Google",
            "ro.product.product.model": "Pixel 6 Pro"
        }
    }
}"#;

#[test]
fn test_write_vendor_module_writes_all_documents() {
    let env = TestEnv::new();
    let plan: GenerationPlan = serde_json::from_str(PLAN).unwrap();

    let written = write_vendor_module(&plan, None, &env.out).unwrap();
    assert_eq!(written.len(), 6);

    let product_mk = env.out.join("aosp_raven.mk");
    for name in [MODULES_MAKEFILE, BOARD_MAKEFILE, DEVICE_MAKEFILE, PRODUCTS_MAKEFILE, README] {
        assert_file_exists(&env.out.join(name));
    }
    assert_file_exists(&product_mk);

    assert_file_contains(&env.out.join(MODULES_MAKEFILE), "ifeq ($(TARGET_DEVICE),raven)");
    assert_file_contains(
        &env.out.join(BOARD_MAKEFILE),
        "BOARD_VENDORIMAGE_FILE_SYSTEM_TYPE := ext4",
    );
    assert_file_contains(&env.out.join(PRODUCTS_MAKEFILE), "$(LOCAL_DIR)/aosp_raven.mk");
    assert_file_contains(&env.out.join(README), "# Google Pixel 6 Pro vendor module");

    let device_mk = fs::read_to_string(env.out.join(DEVICE_MAKEFILE)).unwrap();
    assert!(device_mk.contains("PRODUCT_VENDOR_PROPERTIES += \\\n    ro.vendor.a=1\n"));
    assert!(!device_mk.contains("PRODUCT_SYSTEM_PROPERTIES"));
}

#[test]
fn test_serialization_error_writes_nothing() {
    let env = TestEnv::new();
    let mut plan: GenerationPlan = serde_json::from_str(PLAN).unwrap();
    plan.board.sepolicy_resolutions = Some(
        serde_json::from_str(r#"{"system": {"sepolicyDirs": ["x"]}}"#).unwrap(),
    );

    assert!(write_vendor_module(&plan, None, &env.out).is_err());
    assert!(!env.out.exists());
}

#[test]
fn test_readme_falls_back_to_config_name() {
    let env = TestEnv::new();
    let mut plan: GenerationPlan = serde_json::from_str(PLAN).unwrap();
    plan.stock_props = None;
    let config: DeviceConfig =
        serde_json::from_str(r#"{"device": {"name": "raven", "build_id": "AP1A"}}"#).unwrap();

    write_vendor_module(&plan, Some(&config), &env.out).unwrap();

    assert_file_contains(&env.out.join(README), "# raven vendor module");
    assert_file_contains(&env.out.join("aosp_raven.mk"), "ifneq ($(BUILD_ID),AP1A)");
}

#[test]
fn test_cmd_generate_adds_catalog_copy_files() {
    let env = TestEnv::new();
    let plan_path = env.base_dir.join("plan.json");
    let catalog_path = env.base_dir.join("catalog.json");
    fs::write(&plan_path, PLAN).unwrap();
    fs::write(
        &catalog_path,
        r#"[{"srcPath": "vendor/etc/a.xml", "path": "etc/a.xml", "partition": "vendor"}]"#,
    )
    .unwrap();

    let config = Config {
        jobs: 1,
        proprietary_dir: "vendor/google/raven/proprietary".into(),
    };
    let args = GenerateArgs {
        plan: &plan_path,
        device_config: None,
        catalog: Some(catalog_path.as_path()),
        out_dir: &env.out,
    };
    cmd_generate(&args, &config).unwrap();

    assert_file_contains(
        &env.out.join(DEVICE_MAKEFILE),
        "PRODUCT_COPY_FILES += \\\n    vendor/google/raven/proprietary/vendor/etc/a.xml:$(TARGET_COPY_OUT_VENDOR)/etc/a.xml\n",
    );
}
