//! Equipment entity - a game item with combat stats and per-guild level gates
//!
//! `Equipment` mirrors the backend record exactly: a flat object whose guild
//! requirements live in positional `guild{N}RequiredLevel` fields. The editor
//! works on [`EquipmentDraft`](super::EquipmentDraft) instead, which keys
//! requirements by guild identity.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::EquipmentId;
use crate::value_objects::{GuildLevelSlots, DEFAULT_ALIGNMENT, DEFAULT_HANDEDNESS};

/// A stored equipment record as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Server-assigned; absent on records that haven't been created yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EquipmentId>,
    #[serde(flatten)]
    pub stats: EquipmentStats,
    #[serde(flatten)]
    pub guild_levels: GuildLevelSlots,
}

impl Equipment {
    pub fn equipment_type(&self) -> &str {
        &self.stats.equipment_type
    }

    pub fn name(&self) -> &str {
        &self.stats.name
    }
}

/// Every scalar field of an equipment record.
///
/// Missing or `null` fields decode to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentStats {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub equipment_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub handedness: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub damage_min: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub damage_max: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub defense: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub strength_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub dexterity_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub constitution_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub intelligence_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub wisdom_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub charisma_requirement: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub hit_points: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub mana_points: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub strength_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub dexterity_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub constitution_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub intelligence_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub wisdom_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub charisma_bonus: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub alignment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_cursed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub special: String,
    #[serde(deserialize_with = "null_as_default")]
    pub special2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_url: String,
}

impl Default for EquipmentStats {
    fn default() -> Self {
        Self {
            name: String::new(),
            equipment_type: String::new(),
            handedness: DEFAULT_HANDEDNESS,
            damage_min: 0,
            damage_max: 0,
            defense: 0,
            strength_requirement: 0,
            dexterity_requirement: 0,
            constitution_requirement: 0,
            intelligence_requirement: 0,
            wisdom_requirement: 0,
            charisma_requirement: 0,
            hit_points: 0,
            mana_points: 0,
            strength_bonus: 0,
            dexterity_bonus: 0,
            constitution_bonus: 0,
            intelligence_bonus: 0,
            wisdom_bonus: 0,
            charisma_bonus: 0,
            alignment: DEFAULT_ALIGNMENT.to_string(),
            value: 0,
            is_cursed: false,
            special: String::new(),
            special2: String::new(),
            icon_url: String::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_record() {
        let equipment: Equipment = serde_json::from_value(json!({
            "id": 17,
            "name": "Rusty Axe",
            "type": "Weapon",
            "handedness": 2,
            "damageMin": 2,
            "damageMax": 6,
            "strengthBonus": -1,
            "alignment": "Evil",
            "isCursed": true,
            "special": null,
            "guild1RequiredLevel": 4,
            "guild3RequiredLevel": 1,
            "createdAt": "2024-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(equipment.id, Some(EquipmentId::new(17)));
        assert_eq!(equipment.name(), "Rusty Axe");
        assert_eq!(equipment.equipment_type(), "Weapon");
        assert_eq!(equipment.stats.handedness, 2);
        assert_eq!(equipment.stats.strength_bonus, -1);
        assert!(equipment.stats.is_cursed);
        assert_eq!(equipment.stats.special, "");
        assert_eq!(equipment.stats.defense, 0);
        assert_eq!(
            equipment.guild_levels.iter().collect::<Vec<_>>(),
            vec![(1, 4), (3, 1)]
        );
    }

    #[test]
    fn missing_fields_take_form_defaults() {
        let equipment: Equipment = serde_json::from_value(json!({ "name": "Cap" })).unwrap();

        assert_eq!(equipment.id, None);
        assert_eq!(equipment.stats.alignment, DEFAULT_ALIGNMENT);
        assert_eq!(equipment.stats.handedness, DEFAULT_HANDEDNESS);
        assert!(equipment.guild_levels.is_empty());
    }

    #[test]
    fn new_records_serialize_without_id() {
        let mut equipment = Equipment::default();
        equipment.stats.name = "Buckler".into();
        equipment.guild_levels.insert(1, 2);

        let json = serde_json::to_value(&equipment).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("id"));
        assert_eq!(object["name"], "Buckler");
        assert_eq!(object["isCursed"], false);
        assert_eq!(object["guild1RequiredLevel"], 2);
    }
}
