//! Output formatting: present records as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **Columns**: the fixed column schema of each category
//! - **CellValue**: one formatted cell (text, number, or placeholder dash)
//! - **ItemTable**: headers plus rows for one requested type
//! - **TableSink**: where finished tables go; sinks only append
//!
//! ItemTable is a pure presentation layer - it only formats data into cells.
//! All filtering and sorting happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use armorylib::output::ItemTable;
//! use armorylib::{Catalog, ItemType};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"index": 1, "id": "itm_round_shield", "name": "Round Shield",
//!      "type": "itp_type_shield", "value": 60, "shieldWidth": 30, "shieldHeight": 30}
//! ]"#).unwrap();
//! let table = ItemTable::build(&catalog, ItemType::Shield);
//! assert_eq!(table.headers[6], "Size");
//! assert_eq!(table.rows[0].cells[6].to_string(), "60");
//! ```

pub mod cell;
pub mod columns;
pub mod sink;
pub mod table;

pub use cell::{format_number, CellValue, PLACEHOLDER};
pub use columns::{format_row, headers, schema, Column};
pub use sink::{render, render_tables, TableSink};
pub use table::{ItemTable, TableRow};
