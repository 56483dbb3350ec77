//! Data model: item records, type identifiers, categories.
//!
//! This module holds the types shared by every pipeline stage:
//!
//! - **ItemRecord**: one catalog entry, deserialized straight from JSON
//! - **ItemType**: the fourteen recognized type identifiers
//! - **Category**: the six display groupings those types partition into
//!
//! ## Example
//!
//! ```rust
//! use armorylib::data::{Category, ItemType};
//!
//! let ty: ItemType = "crossbow".parse().unwrap();
//! assert_eq!(ty.identifier(), "itp_type_crossbow");
//! assert_eq!(ty.category(), Category::Ranged);
//! ```

pub mod item;
pub mod item_type;

pub use item::{Damage, ItemRecord, Requirement};
pub use item_type::{Category, ItemType};
