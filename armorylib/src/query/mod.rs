//! Query processing: filter and sort records for one item type.
//!
//! This module handles the third stage of the pipeline - turning the raw
//! catalog into the ordered rows of a single table. It provides:
//!
//! - **Filter**: sentinel/template exclusion and type matching
//! - **QuerySet**: the filtered records, sorted by value
//!
//! ## Example
//!
//! ```rust
//! use armorylib::data::{ItemRecord, ItemType};
//! use armorylib::query::ItemQuerySet;
//!
//! let items = vec![
//!     ItemRecord::new(0, "itm_no_item", "INVALID ITEM", ItemType::Shield),
//!     ItemRecord::new(1, "itm_tab_shield", "Tab Shield", ItemType::Shield).with_value(90.0),
//! ];
//! let queryset = ItemQuerySet::from_items(&items, ItemType::Shield);
//! assert_eq!(queryset.len(), 1);
//! ```

pub mod filter;
pub mod options;
pub mod queryset;

pub use filter::{is_displayable, is_template_id, select_items, sort_by_value, SelectionStats};
pub use options::TableOptions;
pub use queryset::ItemQuerySet;
