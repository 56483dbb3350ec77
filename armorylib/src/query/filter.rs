//! Record selection for a single item type.
//!
//! A record is displayable when it is not the index-0 sentinel and its
//! identifier is not a modifier-bit template (`itm_imodbit_*`,
//! `itm_imodbits_*`). Selection keeps displayable records of the requested
//! type in catalog order.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::item::ItemRecord;
use crate::data::item_type::ItemType;

static TEMPLATE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^itm_imodbits?_").expect("template id pattern is valid"));

/// Whether an identifier names an internal modifier-bit template.
pub fn is_template_id(id: &str) -> bool {
    TEMPLATE_ID.is_match(id)
}

/// Counts of what selection skipped, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Records of the requested type that were kept
    pub matched: usize,
    /// Sentinel records skipped
    pub sentinels: usize,
    /// Template records skipped
    pub templates: usize,
}

/// Why a record is kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Keep,
    Sentinel,
    Template,
    OtherType,
}

fn judge(item: &ItemRecord, item_type: ItemType) -> Verdict {
    if item.is_sentinel() {
        Verdict::Sentinel
    } else if is_template_id(&item.id) {
        Verdict::Template
    } else if item.item_type == item_type.identifier() {
        Verdict::Keep
    } else {
        Verdict::OtherType
    }
}

/// Whether a record may appear in any table.
pub fn is_displayable(item: &ItemRecord) -> bool {
    !item.is_sentinel() && !is_template_id(&item.id)
}

/// Select displayable records of `item_type`, preserving catalog order.
pub fn select_items<'a>(
    items: &'a [ItemRecord],
    item_type: ItemType,
) -> (Vec<&'a ItemRecord>, SelectionStats) {
    let mut stats = SelectionStats::default();
    let mut selected = Vec::new();

    for item in items {
        match judge(item, item_type) {
            Verdict::Keep => {
                stats.matched += 1;
                selected.push(item);
            }
            Verdict::Sentinel => stats.sentinels += 1,
            Verdict::Template => stats.templates += 1,
            Verdict::OtherType => {}
        }
    }

    (selected, stats)
}

/// Stable ascending sort by monetary value.
///
/// Equal values keep their relative catalog order; `0` and `-0` are equal,
/// and a missing value sorts as zero.
pub fn sort_by_value(items: &mut [&ItemRecord]) {
    items.sort_by(|a, b| {
        a.sort_value()
            .partial_cmp(&b.sort_value())
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sword(index: u32, id: &str, value: f64) -> ItemRecord {
        ItemRecord::new(index, id, id, ItemType::OneHanded).with_value(value)
    }

    #[rstest]
    #[case("itm_imodbit_rusty", true)]
    #[case("itm_imodbits_sword", true)]
    #[case("itm_imodbitsx_sword", false)]
    #[case("itm_sword_imodbits_", false)]
    #[case("itm_imodbit", false)]
    #[case("itm_sword", false)]
    fn test_template_pattern(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_template_id(id), expected);
    }

    #[test]
    fn test_select_skips_sentinel_templates_and_other_types() {
        let items = vec![
            sword(0, "itm_no_item", 0.0),
            sword(1, "itm_sword", 100.0),
            sword(2, "itm_imodbits_sword", 10.0),
            ItemRecord::new(3, "itm_bow", "Bow", ItemType::Bow),
            sword(4, "itm_dagger", 20.0),
        ];

        let (selected, stats) = select_items(&items, ItemType::OneHanded);
        let ids: Vec<_> = selected.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["itm_sword", "itm_dagger"]);
        assert_eq!(
            stats,
            SelectionStats {
                matched: 2,
                sentinels: 1,
                templates: 1
            }
        );
    }

    #[test]
    fn test_select_never_yields_hidden_records() {
        // Sentinel and template records of every type must never come back
        let mut items = Vec::new();
        for (i, ty) in ItemType::ALL.into_iter().enumerate() {
            let n = i as u32 * 3;
            items.push(ItemRecord::new(0, format!("itm_none_{n}"), "none", ty));
            items.push(ItemRecord::new(n + 1, format!("itm_imodbit_{n}"), "tpl", ty));
            items.push(ItemRecord::new(n + 2, format!("itm_real_{n}"), "real", ty));
        }

        for ty in ItemType::ALL {
            let (selected, _) = select_items(&items, ty);
            assert_eq!(selected.len(), 1);
            assert!(selected.iter().all(|i| is_displayable(i)));
            assert!(selected.iter().all(|i| i.item_type == ty.identifier()));
        }
    }

    #[test]
    fn test_sort_is_stable_on_equal_values() {
        let items = vec![
            sword(1, "itm_b", 50.0),
            sword(2, "itm_a", 10.0),
            sword(3, "itm_c", 50.0),
            sword(4, "itm_d", 10.0),
            sword(5, "itm_e", 5.0),
        ];
        let (mut selected, _) = select_items(&items, ItemType::OneHanded);
        sort_by_value(&mut selected);

        let ids: Vec<_> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["itm_e", "itm_a", "itm_d", "itm_b", "itm_c"]);
    }

    #[test]
    fn test_sort_treats_signed_zeros_as_ties() {
        let mut free = sword(2, "itm_b", 0.0);
        free.value = Some(-0.0);
        let mut unpriced = sword(3, "itm_c", 0.0);
        unpriced.value = None;
        let items = vec![sword(1, "itm_a", 0.0), free, unpriced];
        let (mut selected, _) = select_items(&items, ItemType::OneHanded);
        sort_by_value(&mut selected);

        let ids: Vec<_> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["itm_a", "itm_b", "itm_c"]);
    }

    #[test]
    fn test_select_on_empty_catalog() {
        let (selected, stats) = select_items(&[], ItemType::Mount);
        assert!(selected.is_empty());
        assert_eq!(stats, SelectionStats::default());
    }
}
