//! Input options for building item tables.
//!
//! This module contains the configuration that controls which catalog is
//! read and which tables are produced from it.

use crate::data::item_type::ItemType;
use crate::error::ArmoryError;
use crate::source::catalog::CatalogSource;

/// Options for a table-building run.
///
/// Tables come out in the order the types were requested; a type requested
/// twice yields two tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Where to read the catalog from
    pub source: CatalogSource,
    /// Requested types, in output order
    pub item_types: Vec<ItemType>,
}

impl TableOptions {
    /// Create new default options (`items.json`, no types).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog source.
    pub fn source(mut self, source: CatalogSource) -> Self {
        self.source = source;
        self
    }

    /// Set the catalog source from a path or URL string.
    pub fn catalog(mut self, location: &str) -> Self {
        self.source = CatalogSource::parse(location);
        self
    }

    /// Request one more table.
    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_types.push(item_type);
        self
    }

    /// Request tables for several types.
    pub fn item_types(mut self, types: impl IntoIterator<Item = ItemType>) -> Self {
        self.item_types.extend(types);
        self
    }

    /// Parse and request a type by short name or identifier.
    pub fn parse_type(self, name: &str) -> Result<Self, ArmoryError> {
        let ty = name.parse()?;
        Ok(self.item_type(ty))
    }
}
