//! Generate command - writes the vendor module makefiles and README.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::blobs::load_catalog;
use crate::common::write_file_with_dirs;
use crate::config::{Config, DeviceConfig};
use crate::make::{
    serialize_board_makefile, serialize_device_makefile, serialize_modules_makefile,
    serialize_product_makefile, serialize_products_makefile,
};
use crate::plan::GenerationPlan;
use crate::readme::{create_readme, friendly_name};
use crate::timing::Timer;

pub const MODULES_MAKEFILE: &str = "Android.mk";
pub const BOARD_MAKEFILE: &str = "BoardConfig.mk";
pub const DEVICE_MAKEFILE: &str = "device.mk";
pub const PRODUCTS_MAKEFILE: &str = "AndroidProducts.mk";
pub const README: &str = "README.md";

/// Inputs of the generate command.
pub struct GenerateArgs<'a> {
    pub plan: &'a Path,
    pub device_config: Option<&'a Path>,
    /// Catalog whose entries are added to PRODUCT_COPY_FILES
    pub catalog: Option<&'a Path>,
    pub out_dir: &'a Path,
}

/// Execute the generate command.
pub fn cmd_generate(args: &GenerateArgs, config: &Config) -> Result<Vec<PathBuf>> {
    let mut plan = GenerationPlan::load(args.plan)?;
    let device_config = args.device_config.map(DeviceConfig::load).transpose()?;

    if let Some(catalog) = args.catalog {
        let entries = load_catalog(catalog)?;
        plan.add_copy_files(&entries, &config.proprietary_dir);
    }

    println!("=== Generating vendor module in {} ===", args.out_dir.display());
    let timer = Timer::start("Writing makefiles");
    let written = write_vendor_module(&plan, device_config.as_ref(), args.out_dir)?;
    timer.finish();

    for path in &written {
        println!("  {}", path.display());
    }
    Ok(written)
}

/// Render every document for `plan`, then write them under `out_dir`.
///
/// Nothing is written if any makefile fails to serialize.
pub fn write_vendor_module(
    plan: &GenerationPlan,
    device_config: Option<&DeviceConfig>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let device = plan.modules.device.as_str();
    let friendly = plan
        .stock_props
        .as_ref()
        .and_then(friendly_name)
        .or_else(|| device_config.and_then(|c| c.device.name.clone()))
        .unwrap_or_else(|| device.to_string());

    let documents = [
        (MODULES_MAKEFILE.to_string(), serialize_modules_makefile(&plan.modules)),
        (BOARD_MAKEFILE.to_string(), serialize_board_makefile(&plan.board, device_config)?),
        (DEVICE_MAKEFILE.to_string(), serialize_device_makefile(&plan.device)?),
        (
            format!("{}.mk", plan.product.name),
            serialize_product_makefile(&plan.product, device_config),
        ),
        (PRODUCTS_MAKEFILE.to_string(), serialize_products_makefile(&plan.products())),
        (README.to_string(), create_readme(device, &friendly)),
    ];

    let mut written = Vec::with_capacity(documents.len());
    for (name, content) in documents {
        let path = out_dir.join(&name);
        write_file_with_dirs(&path, content)?;
        info!(file = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}
