//! Per-category column schemas.
//!
//! Each category has a fixed, ordered list of columns. A column pairs its
//! header with the function that extracts that cell from a record, so a
//! row always lines up with its header row.
//!
//! Ranged weapons are the only category whose schema depends on the exact
//! type: the requirement column is labelled by the skill the subtype uses.

use crate::data::item::ItemRecord;
use crate::data::item_type::{Category, ItemType};

use super::cell::CellValue;

/// One column of a table schema.
#[derive(Clone, Copy)]
pub struct Column {
    /// Header text
    pub header: &'static str,
    /// Cell extractor
    pub cell: fn(&ItemRecord) -> CellValue,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column").field("header", &self.header).finish()
    }
}

const fn col(header: &'static str, cell: fn(&ItemRecord) -> CellValue) -> Column {
    Column { header, cell }
}

fn id(item: &ItemRecord) -> CellValue {
    CellValue::text(&item.id)
}

fn name(item: &ItemRecord) -> CellValue {
    CellValue::text(&item.name)
}

fn requirement(item: &ItemRecord) -> CellValue {
    CellValue::number(item.difficulty.as_ref().and_then(|r| r.value))
}

fn weight(item: &ItemRecord) -> CellValue {
    CellValue::number(item.weight)
}

fn value(item: &ItemRecord) -> CellValue {
    CellValue::number(item.value)
}

fn speed(item: &ItemRecord) -> CellValue {
    CellValue::number(item.speed_rating)
}

fn reach(item: &ItemRecord) -> CellValue {
    CellValue::number(item.weapon_length)
}

fn swing(item: &ItemRecord) -> CellValue {
    CellValue::damage(item.damage_swing.as_ref())
}

fn thrust(item: &ItemRecord) -> CellValue {
    CellValue::damage(item.damage_thrust.as_ref())
}

fn ranged_damage(item: &ItemRecord) -> CellValue {
    CellValue::damage(item.damage_ranged.as_ref())
}

// Charge shows the amount alone, without the damage-type code.
fn charge(item: &ItemRecord) -> CellValue {
    CellValue::number(item.damage_charge.as_ref().map(|d| d.amount))
}

fn missile_speed(item: &ItemRecord) -> CellValue {
    CellValue::number(item.missile_speed)
}

fn accuracy(item: &ItemRecord) -> CellValue {
    CellValue::number(item.accuracy)
}

fn ammo(item: &ItemRecord) -> CellValue {
    CellValue::number(item.max_ammo)
}

fn hit_points(item: &ItemRecord) -> CellValue {
    CellValue::number(item.hit_points)
}

fn resistance(item: &ItemRecord) -> CellValue {
    CellValue::number(item.shield_armor)
}

fn size(item: &ItemRecord) -> CellValue {
    CellValue::shield_size(item.shield_width, item.shield_height)
}

fn head_armor(item: &ItemRecord) -> CellValue {
    CellValue::number(item.head_armor)
}

fn body_armor(item: &ItemRecord) -> CellValue {
    CellValue::number(item.body_armor)
}

fn leg_armor(item: &ItemRecord) -> CellValue {
    CellValue::number(item.leg_armor)
}

fn mount_armor(item: &ItemRecord) -> CellValue {
    CellValue::number(item.mount_armor)
}

fn maneuver(item: &ItemRecord) -> CellValue {
    CellValue::number(item.maneuver)
}

fn flags(item: &ItemRecord) -> CellValue {
    CellValue::flags(&item.weapon_flags)
}

const MELEE: &[Column] = &[
    col("ID", id),
    col("Name", name),
    col("Str Req.", requirement),
    col("Weight", weight),
    col("Speed", speed),
    col("Reach", reach),
    col("Swing", swing),
    col("Thrust", thrust),
    col("Value", value),
    col("Flags", flags),
];

/// Ranged columns after the requirement column.
const RANGED_TAIL: &[Column] = &[
    col("Weight", weight),
    col("Speed", speed),
    col("Missile Speed", missile_speed),
    col("Accuracy", accuracy),
    col("Damage", ranged_damage),
    col("Ammo", ammo),
    col("Value", value),
    col("Flags", flags),
];

const AMMUNITION: &[Column] = &[
    col("ID", id),
    col("Name", name),
    col("Weight", weight),
    col("Damage", ranged_damage),
    col("Ammo", ammo),
    col("Value", value),
    col("Flags", flags),
];

const SHIELD: &[Column] = &[
    col("ID", id),
    col("Name", name),
    col("Shd Req.", requirement),
    col("Weight", weight),
    col("Hit Points", hit_points),
    col("Resistance", resistance),
    col("Size", size),
    col("Speed", speed),
    col("Value", value),
    col("Flags", flags),
];

const ARMOR: &[Column] = &[
    col("ID", id),
    col("Name", name),
    col("Str Req.", requirement),
    col("Weight", weight),
    col("Head Armor", head_armor),
    col("Body Armor", body_armor),
    col("Leg Armor", leg_armor),
    col("Value", value),
];

const MOUNT: &[Column] = &[
    col("ID", id),
    col("Name", name),
    col("Rid Req.", requirement),
    col("Armor", mount_armor),
    col("Speed", speed),
    col("Maneuver", maneuver),
    col("Charge", charge),
    col("Hit Points", hit_points),
    col("Value", value),
];

/// Requirement label for a ranged subtype.
fn ranged_requirement_label(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Crossbow => "Str Req.",
        ItemType::Thrown => "Thr Req.",
        // Bows use power draw
        _ => "PD Req.",
    }
}

/// The ordered columns for a requested type.
pub fn schema(item_type: ItemType) -> Vec<Column> {
    match item_type.category() {
        Category::Melee => MELEE.to_vec(),
        Category::Ranged => {
            let mut columns = vec![
                col("ID", id),
                col("Name", name),
                col(ranged_requirement_label(item_type), requirement),
            ];
            columns.extend_from_slice(RANGED_TAIL);
            columns
        }
        Category::Ammunition => AMMUNITION.to_vec(),
        Category::Shield => SHIELD.to_vec(),
        Category::Armor => ARMOR.to_vec(),
        Category::Mount => MOUNT.to_vec(),
    }
}

/// Header texts for a requested type.
pub fn headers(item_type: ItemType) -> Vec<String> {
    schema(item_type)
        .iter()
        .map(|c| c.header.to_string())
        .collect()
}

/// Cells for one record, aligned with `schema(item_type)`.
pub fn format_row(columns: &[Column], item: &ItemRecord) -> Vec<CellValue> {
    columns.iter().map(|c| (c.cell)(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::item::Damage;
    use rstest::rstest;

    fn texts(cells: &[CellValue]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_melee_headers() {
        assert_eq!(
            headers(ItemType::OneHanded),
            vec![
                "ID", "Name", "Str Req.", "Weight", "Speed", "Reach", "Swing", "Thrust", "Value",
                "Flags"
            ]
        );
        assert_eq!(headers(ItemType::Polearm), headers(ItemType::TwoHanded));
    }

    #[rstest]
    #[case(ItemType::Bow, "PD Req.")]
    #[case(ItemType::Crossbow, "Str Req.")]
    #[case(ItemType::Thrown, "Thr Req.")]
    fn test_ranged_requirement_label(#[case] ty: ItemType, #[case] label: &str) {
        let h = headers(ty);
        assert_eq!(h.len(), 11);
        assert_eq!(h[2], label);
        assert_eq!(h[5], "Missile Speed");
    }

    #[test]
    fn test_other_headers() {
        assert_eq!(
            headers(ItemType::Arrow),
            vec!["ID", "Name", "Weight", "Damage", "Ammo", "Value", "Flags"]
        );
        assert_eq!(
            headers(ItemType::Shield),
            vec![
                "ID",
                "Name",
                "Shd Req.",
                "Weight",
                "Hit Points",
                "Resistance",
                "Size",
                "Speed",
                "Value",
                "Flags"
            ]
        );
        assert_eq!(
            headers(ItemType::FootArmor),
            vec![
                "ID",
                "Name",
                "Str Req.",
                "Weight",
                "Head Armor",
                "Body Armor",
                "Leg Armor",
                "Value"
            ]
        );
        assert_eq!(
            headers(ItemType::Mount),
            vec![
                "ID",
                "Name",
                "Rid Req.",
                "Armor",
                "Speed",
                "Maneuver",
                "Charge",
                "Hit Points",
                "Value"
            ]
        );
    }

    #[test]
    fn test_melee_row() {
        let mut item = ItemRecord::new(1, "itm_sword", "Sword", ItemType::OneHanded)
            .with_value(120.0)
            .with_weight(1.2);
        item.speed_rating = Some(95.0);
        item.weapon_length = Some(80.0);
        item.damage_swing = Some(Damage::new(30.0, "c"));
        item.weapon_flags = vec!["bonus_against_shield".to_string()];

        let row = format_row(&schema(ItemType::OneHanded), &item);
        assert_eq!(
            texts(&row),
            vec![
                "itm_sword",
                "Sword",
                "-",
                "1.2",
                "95",
                "80",
                "30c",
                "-",
                "120",
                "bonus_against_shield"
            ]
        );
    }

    #[test]
    fn test_ranged_row() {
        let mut item = ItemRecord::new(7, "itm_war_bow", "War Bow", ItemType::Bow)
            .with_value(728.0)
            .with_weight(1.5)
            .with_difficulty(4.0);
        item.speed_rating = Some(81.0);
        item.missile_speed = Some(94.0);
        item.accuracy = Some(95.0);
        item.damage_ranged = Some(Damage::new(18.0, "c"));
        item.max_ammo = Some(0.0);
        item.weapon_flags = vec!["two_handed".to_string(), "cant_use_on_horseback".to_string()];

        let row = format_row(&schema(ItemType::Bow), &item);
        assert_eq!(
            texts(&row),
            vec![
                "itm_war_bow",
                "War Bow",
                "4",
                "1.5",
                "81",
                "94",
                "95",
                "18c",
                "0",
                "728",
                "two_handed,cant_use_on_horseback"
            ]
        );
    }

    #[test]
    fn test_ammunition_row() {
        let mut item = ItemRecord::new(9, "itm_bolts", "Bolts", ItemType::Bolt)
            .with_value(64.0)
            .with_weight(2.25);
        item.damage_ranged = Some(Damage::new(1.0, "p"));
        item.max_ammo = Some(29.0);

        let row = format_row(&schema(ItemType::Bolt), &item);
        assert_eq!(
            texts(&row),
            vec!["itm_bolts", "Bolts", "2.25", "1p", "29", "64", ""]
        );
    }

    #[test]
    fn test_shield_row() {
        let mut item = ItemRecord::new(12, "itm_kite", "Kite Shield", ItemType::Shield)
            .with_value(150.0)
            .with_weight(3.5)
            .with_difficulty(2.0);
        item.hit_points = Some(380.0);
        item.shield_armor = Some(10.0);
        item.shield_width = Some(32.0);
        item.shield_height = Some(24.0);
        item.speed_rating = Some(82.0);

        let row = format_row(&schema(ItemType::Shield), &item);
        assert_eq!(row[6].to_string(), "64\u{d7}56");
        assert_eq!(row[2].to_string(), "2");
        assert_eq!(row[9].to_string(), "");
    }

    #[test]
    fn test_armor_row_has_no_flags() {
        let mut item = ItemRecord::new(20, "itm_mail", "Mail Shirt", ItemType::BodyArmor)
            .with_value(1040.0)
            .with_weight(19.0)
            .with_difficulty(7.0);
        item.head_armor = Some(0.0);
        item.body_armor = Some(37.0);
        item.leg_armor = Some(12.0);
        item.weapon_flags = vec!["ignored".to_string()];

        let row = format_row(&schema(ItemType::BodyArmor), &item);
        assert_eq!(
            texts(&row),
            vec!["itm_mail", "Mail Shirt", "7", "19", "0", "37", "12", "1040"]
        );
    }

    #[test]
    fn test_mount_charge_has_no_type_code() {
        let mut item = ItemRecord::new(30, "itm_courser", "Courser", ItemType::Mount)
            .with_value(810.0)
            .with_difficulty(2.0);
        item.mount_armor = Some(12.0);
        item.speed_rating = Some(50.0);
        item.maneuver = Some(44.0);
        item.damage_charge = Some(Damage::new(11.0, "b"));
        item.hit_points = Some(110.0);

        let row = format_row(&schema(ItemType::Mount), &item);
        assert_eq!(
            texts(&row),
            vec!["itm_courser", "Courser", "2", "12", "50", "44", "11", "110", "810"]
        );

        item.damage_charge = None;
        let row = format_row(&schema(ItemType::Mount), &item);
        assert_eq!(row[6], CellValue::Missing);
    }

    #[test]
    fn test_null_weight_and_value_render_placeholder() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"index": 5, "id": "itm_stick", "type": "itp_type_one_handed_wpn",
                "weight": null, "value": null}"#,
        )
        .unwrap();

        let row = format_row(&schema(ItemType::OneHanded), &item);
        assert_eq!(row[3], CellValue::Missing);
        assert_eq!(row[8], CellValue::Missing);
    }

    #[test]
    fn test_rows_align_with_headers_for_every_type() {
        let item = ItemRecord::new(1, "itm_x", "X", ItemType::OneHanded);
        for ty in ItemType::ALL {
            let columns = schema(ty);
            assert_eq!(format_row(&columns, &item).len(), headers(ty).len());
        }
    }
}
