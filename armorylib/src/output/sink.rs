//! Presentation sinks and the end-to-end render entry point.
//!
//! A sink receives finished tables one at a time and owns the actual
//! presentation (HTML page, terminal text, JSON). Sinks only ever append:
//! rendering several types into one sink accumulates their tables in
//! request order.

use log::info;

use crate::data::item_type::ItemType;
use crate::query::options::TableOptions;
use crate::source::catalog::Catalog;
use crate::Result;

use super::table::ItemTable;

/// Destination for rendered tables.
pub trait TableSink {
    /// Append one table after everything appended so far.
    fn append(&mut self, table: &ItemTable) -> Result<()>;
}

/// Collects tables in memory.
impl TableSink for Vec<ItemTable> {
    fn append(&mut self, table: &ItemTable) -> Result<()> {
        self.push(table.clone());
        Ok(())
    }
}

impl<S: TableSink + ?Sized> TableSink for &mut S {
    fn append(&mut self, table: &ItemTable) -> Result<()> {
        (**self).append(table)
    }
}

/// Render one table per requested type into `sink`.
///
/// Returns the number of tables appended.
pub fn render_tables(
    catalog: &Catalog,
    types: &[ItemType],
    sink: &mut dyn TableSink,
) -> Result<usize> {
    for ty in types {
        let table = ItemTable::build(catalog, *ty);
        info!("{}: {} rows", ty, table.len());
        sink.append(&table)?;
    }
    Ok(types.len())
}

/// Load the catalog named in `options` once and render every requested type.
pub fn render(options: &TableOptions, sink: &mut dyn TableSink) -> Result<usize> {
    let catalog = options.source.load()?;
    render_tables(&catalog, &options.item_types, sink)
}
