//! Item type identifiers and their display categories.
//!
//! The catalog tags every record with a string identifier such as
//! `itp_type_one_handed_wpn`. Fourteen of those identifiers are displayable,
//! and each belongs to exactly one of six categories:
//!
//! - **Melee**: one-handed, two-handed, polearm
//! - **Ranged**: bow, crossbow, thrown
//! - **Ammunition**: arrows, bolts
//! - **Shield**
//! - **Armor**: head, body, foot, hand
//! - **Mount**
//!
//! The partition is a `match` over a closed enum, so adding a type without
//! assigning it a category fails to compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArmoryError;

/// A recognized item type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    OneHanded,
    TwoHanded,
    Polearm,
    Bow,
    Crossbow,
    Thrown,
    Arrow,
    Bolt,
    Shield,
    HeadArmor,
    BodyArmor,
    FootArmor,
    HandArmor,
    Mount,
}

impl ItemType {
    /// Every recognized type, in catalog display order.
    pub const ALL: [ItemType; 14] = [
        ItemType::OneHanded,
        ItemType::TwoHanded,
        ItemType::Polearm,
        ItemType::Bow,
        ItemType::Crossbow,
        ItemType::Thrown,
        ItemType::Arrow,
        ItemType::Bolt,
        ItemType::Shield,
        ItemType::HeadArmor,
        ItemType::BodyArmor,
        ItemType::FootArmor,
        ItemType::HandArmor,
        ItemType::Mount,
    ];

    /// The identifier as it appears in the `type` field of catalog records.
    pub fn identifier(&self) -> &'static str {
        match self {
            ItemType::OneHanded => "itp_type_one_handed_wpn",
            ItemType::TwoHanded => "itp_type_two_handed_wpn",
            ItemType::Polearm => "itp_type_polearm",
            ItemType::Bow => "itp_type_bow",
            ItemType::Crossbow => "itp_type_crossbow",
            ItemType::Thrown => "itp_type_thrown",
            ItemType::Arrow => "itp_type_arrows",
            ItemType::Bolt => "itp_type_bolts",
            ItemType::Shield => "itp_type_shield",
            ItemType::HeadArmor => "itp_type_head_armor",
            ItemType::BodyArmor => "itp_type_body_armor",
            ItemType::FootArmor => "itp_type_foot_armor",
            ItemType::HandArmor => "itp_type_hand_armor",
            ItemType::Mount => "itp_type_horse",
        }
    }

    /// Short name accepted on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            ItemType::OneHanded => "onehanded",
            ItemType::TwoHanded => "twohanded",
            ItemType::Polearm => "polearm",
            ItemType::Bow => "bow",
            ItemType::Crossbow => "crossbow",
            ItemType::Thrown => "thrown",
            ItemType::Arrow => "arrow",
            ItemType::Bolt => "bolt",
            ItemType::Shield => "shield",
            ItemType::HeadArmor => "headarmor",
            ItemType::BodyArmor => "bodyarmor",
            ItemType::FootArmor => "footarmor",
            ItemType::HandArmor => "handarmor",
            ItemType::Mount => "mount",
        }
    }

    /// Human-readable label used in table titles.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::OneHanded => "One-Handed",
            ItemType::TwoHanded => "Two-Handed",
            ItemType::Polearm => "Polearms",
            ItemType::Bow => "Bows",
            ItemType::Crossbow => "Crossbows",
            ItemType::Thrown => "Thrown",
            ItemType::Arrow => "Arrows",
            ItemType::Bolt => "Bolts",
            ItemType::Shield => "Shields",
            ItemType::HeadArmor => "Head Armor",
            ItemType::BodyArmor => "Body Armor",
            ItemType::FootArmor => "Foot Armor",
            ItemType::HandArmor => "Hand Armor",
            ItemType::Mount => "Mounts",
        }
    }

    /// The display category this type is routed to.
    pub fn category(&self) -> Category {
        match self {
            ItemType::OneHanded | ItemType::TwoHanded | ItemType::Polearm => Category::Melee,
            ItemType::Bow | ItemType::Crossbow | ItemType::Thrown => Category::Ranged,
            ItemType::Arrow | ItemType::Bolt => Category::Ammunition,
            ItemType::Shield => Category::Shield,
            ItemType::HeadArmor
            | ItemType::BodyArmor
            | ItemType::FootArmor
            | ItemType::HandArmor => Category::Armor,
            ItemType::Mount => Category::Mount,
        }
    }

    /// Look up a type by its catalog identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.identifier() == identifier)
    }
}

impl FromStr for ItemType {
    type Err = ArmoryError;

    /// Accepts the short name (`onehanded`) or the full identifier
    /// (`itp_type_one_handed_wpn`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.short_name() == needle || t.identifier() == needle)
            .ok_or_else(|| ArmoryError::UnknownItemType(s.to_string()))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// One of the six display groupings, each with its own column schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Melee,
    Ranged,
    Ammunition,
    Shield,
    Armor,
    Mount,
}

impl Category {
    /// All categories.
    pub const ALL: [Category; 6] = [
        Category::Melee,
        Category::Ranged,
        Category::Ammunition,
        Category::Shield,
        Category::Armor,
        Category::Mount,
    ];

    /// Plural display name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Melee => "Melee Weapons",
            Category::Ranged => "Ranged Weapons",
            Category::Ammunition => "Ammunition",
            Category::Shield => "Shields",
            Category::Armor => "Armor",
            Category::Mount => "Mounts",
        }
    }

    /// Types routed to this category.
    pub fn item_types(&self) -> Vec<ItemType> {
        ItemType::ALL
            .into_iter()
            .filter(|t| t.category() == *self)
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
