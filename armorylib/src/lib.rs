//! # armorylib
//!
//! Classify a game item catalog and format it into per-category tables.
//!
//! ## Overview
//!
//! A catalog is a flat list of item records (weapons, ammunition, shields,
//! armor, mounts), each tagged with a type identifier. This library routes a
//! requested type to one of six display categories, picks the matching
//! records, orders them by value, and formats every cell, including derived
//! fields such as `30c` for a cut damage of 30 or `64×56` for a shield size.
//!
//! The pipeline has four stages, one module each:
//!
//! - **source**: load the catalog from a file or an HTTP URL
//! - **data**: item records, type identifiers, categories
//! - **query**: drop the sentinel and template records, keep one type, sort
//! - **output**: column schemas, cell values, tables, and sinks
//!
//! Presentation itself (HTML, terminal text) lives behind the `TableSink`
//! trait; the library returns pure data.
//!
//! ## Example
//!
//! ```rust
//! use armorylib::{Catalog, ItemTable, ItemType};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"index": 0, "id": "itm_no_item", "name": "INVALID ITEM", "type": "itp_type_one_handed_wpn"},
//!     {"index": 1, "id": "itm_sword", "name": "Sword", "type": "itp_type_one_handed_wpn",
//!      "value": 120, "weight": 1.2, "speedRating": 95, "weaponLength": 80,
//!      "damageSwing": {"amount": 30, "type": "c"}, "weaponFlags": ["bonus_against_shield"]}
//! ]"#).unwrap();
//!
//! let ty: ItemType = "onehanded".parse().unwrap();
//! let table = ItemTable::build(&catalog, ty);
//!
//! assert_eq!(table.rows.len(), 1);
//! assert_eq!(table.rows[0].cells[6].to_string(), "30c");
//! assert_eq!(table.rows[0].cells[7].to_string(), "-");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{Category, Damage, ItemRecord, ItemType, Requirement};
pub use error::ArmoryError;
pub use output::{
    render, render_tables, CellValue, ItemTable, TableRow, TableSink, PLACEHOLDER,
};
pub use query::{ItemQuerySet, SelectionStats, TableOptions};
pub use source::{load_catalog, Catalog, CatalogSource, DEFAULT_CATALOG};

/// Result type for armorylib operations
pub type Result<T> = std::result::Result<T, ArmoryError>;
