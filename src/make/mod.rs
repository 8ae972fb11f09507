//! Makefile generation for the vendor module.
//!
//! - `blocks`: block assembly and the continuation-list format
//! - `models`: what each makefile contains
//! - `paths`: build-system path references
//! - `serialize`: model to text

pub mod blocks;
pub mod models;
pub mod paths;
pub mod serialize;

pub use blocks::{Blocks, CONT_SEPARATOR, MAKEFILE_HEADER};
pub use models::{
    BoardMakefile, DeviceMakefile, ModulesMakefile, ProductMakefile, ProductsMakefile, Symlink,
};
pub use paths::{blob_to_file_copy, part_path_to_make_path};
pub use serialize::{
    serialize_board_makefile, serialize_device_makefile, serialize_modules_makefile,
    serialize_product_makefile, serialize_products_makefile,
};
