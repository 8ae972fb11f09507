//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::partition::{sepolicy_dirs_var, vintf_manifest_var, Partition};

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the partition variable tables
    Partitions,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => config.print(),
        ShowTarget::Partitions => {
            println!("{:<12} {:<36} {}", "PARTITION", "SEPOLICY DIRS", "VINTF MANIFEST");
            for part in Partition::ALL {
                println!(
                    "{:<12} {:<36} {}",
                    part.as_str(),
                    sepolicy_dirs_var(part).unwrap_or("-"),
                    vintf_manifest_var(part).unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}
