//! Catalog acquisition: read the item records from disk or over HTTP.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **CatalogSource**: a file path or URL, parsed from a location string
//! - **Catalog**: the loaded, immutable record list

pub mod catalog;

pub use catalog::{load_catalog, Catalog, CatalogSource, DEFAULT_CATALOG};
