//! Configuration management for vendorgen.
//!
//! Tool settings come from the environment (a `.env` file is loaded into it
//! by `main`). Per-device settings live in [`device::DeviceConfig`].

pub mod device;

use anyhow::{Context, Result};

pub use device::DeviceConfig;

/// Default directory name, relative to the vendor module, holding the blobs.
pub const DEFAULT_PROPRIETARY_DIR: &str = "proprietary";

/// vendorgen tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Blobs materialized concurrently (1 = sequential)
    pub jobs: usize,
    /// Directory prefix used in PRODUCT_COPY_FILES sources
    pub proprietary_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: 1,
            proprietary_dir: DEFAULT_PROPRIETARY_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `VENDORGEN_JOBS`: materializer parallelism (default 1)
    /// - `VENDORGEN_PROPRIETARY_DIR`: blob directory name (default `proprietary`)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(jobs) = std::env::var("VENDORGEN_JOBS") {
            config.jobs = jobs
                .trim()
                .parse()
                .with_context(|| format!("VENDORGEN_JOBS is not a number: '{}'", jobs))?;
        }
        if let Ok(dir) = std::env::var("VENDORGEN_PROPRIETARY_DIR") {
            let dir = dir.trim().trim_end_matches('/');
            if !dir.is_empty() {
                config.proprietary_dir = dir.to_string();
            }
        }

        Ok(config)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  VENDORGEN_JOBS: {}", self.jobs);
        println!("  VENDORGEN_PROPRIETARY_DIR: {}", self.proprietary_dir);
    }
}
