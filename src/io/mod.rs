//! IO utilities for loading observed catalogs.

pub mod catalog;

pub use catalog::{read_catalog_csv, read_catalog_csv_with_config, CatalogReaderConfig, ObservedCatalog};
