//! Item records as they appear in the catalog file.
//!
//! Records are flat: every category-specific field lives on the same struct
//! and is simply absent for items of other categories. Field names on the
//! wire are camelCase, matching the exported catalog.

use serde::{Deserialize, Deserializer, Serialize};

use super::item_type::ItemType;

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Damage amount paired with its damage-type code (`c`, `p`, `b`).
///
/// Either both halves are present or the whole field is absent on the
/// record; a half-filled object fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Damage {
    pub fn new(amount: f64, kind: impl Into<String>) -> Self {
        Self {
            amount,
            kind: kind.into(),
        }
    }
}

/// Skill or attribute requirement to use an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub value: Option<f64>,
}

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Positional index; 0 is the "no item" sentinel
    #[serde(default)]
    pub index: Option<u32>,
    /// Stable identifier, e.g. `itm_sword`
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw type identifier, e.g. `itp_type_one_handed_wpn`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub item_type: String,
    #[serde(default)]
    pub weight: Option<f64>,
    /// Monetary value; tables are sorted ascending on this
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<Requirement>,

    #[serde(default)]
    pub speed_rating: Option<f64>,
    #[serde(default)]
    pub weapon_length: Option<f64>,
    #[serde(default)]
    pub missile_speed: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub max_ammo: Option<f64>,
    #[serde(default)]
    pub hit_points: Option<f64>,

    #[serde(default)]
    pub shield_armor: Option<f64>,
    #[serde(default)]
    pub shield_width: Option<f64>,
    #[serde(default)]
    pub shield_height: Option<f64>,

    #[serde(default)]
    pub head_armor: Option<f64>,
    #[serde(default)]
    pub body_armor: Option<f64>,
    #[serde(default)]
    pub leg_armor: Option<f64>,

    #[serde(default)]
    pub mount_armor: Option<f64>,
    #[serde(default)]
    pub maneuver: Option<f64>,

    #[serde(default)]
    pub damage_swing: Option<Damage>,
    #[serde(default)]
    pub damage_thrust: Option<Damage>,
    #[serde(default)]
    pub damage_ranged: Option<Damage>,
    #[serde(default)]
    pub damage_charge: Option<Damage>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub weapon_flags: Vec<String>,
}

impl ItemRecord {
    /// Create a record with the identifying fields set and everything else empty.
    pub fn new(index: u32, id: impl Into<String>, name: impl Into<String>, ty: ItemType) -> Self {
        Self {
            index: Some(index),
            id: id.into(),
            name: name.into(),
            item_type: ty.identifier().to_string(),
            ..Self::default()
        }
    }

    /// The "no item" placeholder at index 0. A record without an index is
    /// never the sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.index == Some(0)
    }

    /// Sort key; a missing value counts as zero.
    pub fn sort_value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Parsed type, if the identifier is one of the recognized types.
    pub fn recognized_type(&self) -> Option<ItemType> {
        ItemType::from_identifier(&self.item_type)
    }

    /// Builder: set the value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Builder: set the weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder: set the requirement
    pub fn with_difficulty(mut self, value: f64) -> Self {
        self.difficulty = Some(Requirement { value: Some(value) });
        self
    }
}
