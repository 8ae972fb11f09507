//! vendorgen - AOSP vendor module generator.
//!
//! Turns a catalog of extracted proprietary blobs into a vendor module:
//! - the blob tree itself (copied, with known XML quirks patched)
//! - Android.mk, BoardConfig.mk, device.mk and the product makefiles

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vendorgen::commands;
use vendorgen::config::Config;

#[derive(Parser)]
#[command(name = "vendorgen")]
#[command(about = "AOSP vendor module generator")]
#[command(
    after_help = "QUICK START:\n  vendorgen copy --catalog blobs.json --src extracted/ --out vendor/google/raven/proprietary\n  vendorgen generate --plan plan.json --config raven.json --out vendor/google/raven"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy catalog blobs into the vendor tree, patching vendor XML quirks
    Copy {
        /// Blob catalog (JSON array of entries)
        #[arg(long)]
        catalog: PathBuf,
        /// Root the catalog's source paths are relative to
        #[arg(long)]
        src: PathBuf,
        /// Destination root
        #[arg(long)]
        out: PathBuf,
        /// Blobs copied concurrently (default: VENDORGEN_JOBS or 1)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Write makefiles and README for a generation plan
    Generate {
        /// Generation plan (JSON)
        #[arg(long)]
        plan: PathBuf,
        /// Device configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Blob catalog to install through PRODUCT_COPY_FILES
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Vendor module directory
        #[arg(long)]
        out: PathBuf,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show partition variable tables
    Partitions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Copy {
            catalog,
            src,
            out,
            jobs,
        } => {
            commands::cmd_copy(&catalog, &src, &out, jobs.unwrap_or(config.jobs))?;
        }

        Commands::Generate {
            plan,
            config: device_config,
            catalog,
            out,
        } => {
            let args = commands::GenerateArgs {
                plan: &plan,
                device_config: device_config.as_deref(),
                catalog: catalog.as_deref(),
                out_dir: &out,
            };
            commands::cmd_generate(&args, &config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Partitions => commands::show::ShowTarget::Partitions,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
