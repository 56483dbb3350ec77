//! Query set: the ordered records for one requested item type.
//!
//! A QuerySet sits between the raw catalog and the final table output.
//! It represents records that have been:
//! - Classified (the requested type resolved to its category)
//! - Filtered (sentinel, templates and other types dropped)
//! - Sorted ascending by value, ties in catalog order
//!
//! The data pipeline is:
//! 1. Catalog (every record)
//! 2. ItemQuerySet (filtered, sorted)
//! 3. ItemTable (cells for display)

use log::debug;

use crate::data::item::ItemRecord;
use crate::data::item_type::{Category, ItemType};
use crate::source::catalog::Catalog;

use super::filter::{select_items, sort_by_value, SelectionStats};

/// Records of one type, ready to be formatted.
#[derive(Debug, Clone)]
pub struct ItemQuerySet<'a> {
    /// Requested type
    pub item_type: ItemType,
    /// Category the type routes to
    pub category: Category,
    /// Matching records, ascending by value
    pub items: Vec<&'a ItemRecord>,
    /// What the filter skipped on the way
    pub stats: SelectionStats,
}

impl<'a> ItemQuerySet<'a> {
    /// Build a query set from a catalog.
    pub fn from_catalog(catalog: &'a Catalog, item_type: ItemType) -> Self {
        Self::from_items(catalog.items(), item_type)
    }

    /// Build a query set from a slice of records.
    pub fn from_items(items: &'a [ItemRecord], item_type: ItemType) -> Self {
        let (mut selected, stats) = select_items(items, item_type);
        sort_by_value(&mut selected);

        debug!(
            "{}: {} matched, {} sentinel skipped, {} template skipped",
            item_type, stats.matched, stats.sentinels, stats.templates
        );

        ItemQuerySet {
            item_type,
            category: item_type.category(),
            items: selected,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            ItemRecord::new(0, "itm_no_item", "INVALID ITEM", ItemType::OneHanded),
            ItemRecord::new(1, "itm_long_bow", "Long Bow", ItemType::Bow).with_value(400.0),
            ItemRecord::new(2, "itm_short_bow", "Short Bow", ItemType::Bow).with_value(80.0),
            ItemRecord::new(3, "itm_hunting_bow", "Hunting Bow", ItemType::Bow).with_value(80.0),
            ItemRecord::new(4, "itm_arrows", "Arrows", ItemType::Arrow).with_value(70.0),
        ])
    }

    #[test]
    fn test_query_set_sorted_and_classified() {
        let catalog = sample_catalog();
        let qs = ItemQuerySet::from_catalog(&catalog, ItemType::Bow);

        assert_eq!(qs.category, Category::Ranged);
        assert_eq!(qs.len(), 3);
        let ids: Vec<_> = qs.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["itm_short_bow", "itm_hunting_bow", "itm_long_bow"]);
        assert_eq!(qs.stats.sentinels, 1);
    }

    #[test]
    fn test_query_set_empty_for_absent_type() {
        let catalog = sample_catalog();
        let qs = ItemQuerySet::from_catalog(&catalog, ItemType::Mount);
        assert!(qs.is_empty());
        assert_eq!(qs.category, Category::Mount);
    }
}
