//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `copy` - Materialize blobs into the vendor tree
//! - `generate` - Write makefiles and README
//! - `show` - Display information

pub mod copy;
pub mod generate;
pub mod show;

pub use copy::cmd_copy;
pub use generate::{cmd_generate, write_vendor_module, GenerateArgs};
pub use show::cmd_show;
