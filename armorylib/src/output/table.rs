//! Table-ready data structures for item output.
//!
//! This module provides `ItemTable`, a presentation-ready data structure
//! that can be handed to any sink or serialized to JSON.
//!
//! The data flow is:
//! 1. Catalog (every record)
//! 2. ItemQuerySet (filtered and sorted)
//! 3. ItemTable (cell values for display)
//!
//! ItemTable is a pure presentation layer - it only formats data, no filtering
//! or sorting logic.

use serde::Serialize;

use crate::data::item_type::{Category, ItemType};
use crate::query::queryset::ItemQuerySet;
use crate::source::catalog::Catalog;

use super::cell::CellValue;
use super::columns::{format_row, schema};

/// A single data row; cells line up with the table headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableRow {
    pub cells: Vec<CellValue>,
}

/// Table-ready item data for one requested type.
///
/// Sinks iterate over headers and rows and apply presentation - no
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTable {
    /// Heading, e.g. "Melee Weapons: One-Handed (itp_type_one_handed_wpn)"
    pub title: String,
    /// Requested type
    pub item_type: ItemType,
    /// Category whose schema was used
    pub category: Category,
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows, ascending by value
    pub rows: Vec<TableRow>,
}

impl ItemTable {
    /// Create an ItemTable from an ItemQuerySet.
    ///
    /// The QuerySet already contains filtered and sorted records.
    /// This method just formats them into cells.
    pub fn from_queryset(qs: &ItemQuerySet<'_>) -> Self {
        let columns = schema(qs.item_type);
        let headers = columns.iter().map(|c| c.header.to_string()).collect();
        let rows = qs
            .items
            .iter()
            .map(|item| TableRow {
                cells: format_row(&columns, item),
            })
            .collect();

        ItemTable {
            title: build_title(qs.item_type),
            item_type: qs.item_type,
            category: qs.category,
            headers,
            rows,
        }
    }

    /// Classify, filter, sort and format in one step.
    pub fn build(catalog: &Catalog, item_type: ItemType) -> Self {
        Self::from_queryset(&ItemQuerySet::from_catalog(catalog, item_type))
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// "<category>: <type> (<identifier>)", dropping the type when it repeats
/// the category (shields, mounts).
fn build_title(item_type: ItemType) -> String {
    let category = item_type.category().label();
    let label = item_type.label();
    if category == label {
        format!("{} ({})", label, item_type.identifier())
    } else {
        format!("{}: {} ({})", category, label, item_type.identifier())
    }
}
