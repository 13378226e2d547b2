//! Filesystem and sandbox concerns: plugin paths and catalog loading.

pub mod catalog;
pub mod paths;

pub use catalog::{bundled_catalog, load_catalog};
pub use paths::{default_store_path, expand_tilde, get_data_dir};
