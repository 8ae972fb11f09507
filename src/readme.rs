//! README for the generated vendor module.

use crate::blobs::PartitionProps;
use crate::partition::Partition;

pub fn create_readme(device: &str, friendly_device: &str) -> String {
    format!(
        "# {friendly} vendor module

This is an automatically-generated vendor module to build AOSP for the {friendly} (codename `{device}`).

Generated by vendorgen. Do not edit the makefiles by hand; regenerate them instead.
",
        friendly = friendly_device,
        device = device,
    )
}

/// "Manufacturer Model" from the stock product partition properties.
pub fn friendly_name(stock_props: &PartitionProps) -> Option<String> {
    let product = stock_props.get(&Partition::Product)?;
    let manufacturer = product.get("ro.product.product.manufacturer")?;
    let model = product.get("ro.product.product.model")?;
    Some(format!("{} {}", manufacturer, model))
}
