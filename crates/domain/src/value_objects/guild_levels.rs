//! Positional guild level fields as the backend stores them.
//!
//! The backend keeps one `guild{N}RequiredLevel` column per guild, where `N`
//! is the guild's 1-based position in the guild list. `GuildLevelSlots` holds
//! those columns keyed by slot number and (de)serializes them as flat fields,
//! so it is meant to be `#[serde(flatten)]`ed into a record.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FIELD_PREFIX: &str = "guild";
const FIELD_SUFFIX: &str = "RequiredLevel";

/// Wire field name for a 1-based guild slot.
pub fn slot_field_name(slot: u32) -> String {
    format!("{FIELD_PREFIX}{slot}{FIELD_SUFFIX}")
}

/// Parse a wire field name back into its slot number.
///
/// Returns `None` for anything that is not `guild{N}RequiredLevel` with
/// `N >= 1` written in plain decimal digits.
pub fn parse_slot_field_name(name: &str) -> Option<u32> {
    let digits = name
        .strip_prefix(FIELD_PREFIX)?
        .strip_suffix(FIELD_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|slot| *slot >= 1)
}

/// Required levels keyed by 1-based guild slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildLevelSlots(BTreeMap<u32, i32>);

impl GuildLevelSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: u32) -> Option<i32> {
        self.0.get(&slot).copied()
    }

    pub fn insert(&mut self, slot: u32, level: i32) {
        self.0.insert(slot, level);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.0.iter().map(|(slot, level)| (*slot, *level))
    }
}

impl FromIterator<(u32, i32)> for GuildLevelSlots {
    fn from_iter<I: IntoIterator<Item = (u32, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for GuildLevelSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slot, level) in &self.0 {
            map.serialize_entry(&slot_field_name(*slot), level)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GuildLevelSlots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SlotVisitor)
    }
}

struct SlotVisitor;

impl<'de> Visitor<'de> for SlotVisitor {
    type Value = GuildLevelSlots;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map containing guild{N}RequiredLevel fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut slots = GuildLevelSlots::new();
        while let Some(key) = access.next_key::<String>()? {
            match parse_slot_field_name(&key) {
                Some(slot) => {
                    // null means "not set"; treat like a missing field
                    if let Some(level) = access.next_value::<Option<i32>>()? {
                        slots.insert(slot, level);
                    }
                }
                None => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_names_round_trip() {
        assert_eq!(slot_field_name(1), "guild1RequiredLevel");
        assert_eq!(parse_slot_field_name("guild12RequiredLevel"), Some(12));
    }

    #[test]
    fn rejects_malformed_field_names() {
        for name in [
            "guildRequiredLevel",
            "guild0RequiredLevel",
            "guild-1RequiredLevel",
            "guild+1RequiredLevel",
            "guild1requiredLevel",
            "guild1RequiredLevelX",
            "name",
        ] {
            assert_eq!(parse_slot_field_name(name), None, "{name}");
        }
    }

    #[test]
    fn deserialize_picks_only_guild_fields() {
        let slots: GuildLevelSlots = serde_json::from_value(json!({
            "name": "Mace",
            "guild2RequiredLevel": 5,
            "guild1RequiredLevel": 3,
            "guild3RequiredLevel": null,
        }))
        .unwrap();

        assert_eq!(slots.iter().collect::<Vec<_>>(), vec![(1, 3), (2, 5)]);
    }

    #[test]
    fn serializes_as_flat_fields() {
        let slots: GuildLevelSlots = [(1, 3), (2, 0)].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&slots).unwrap(),
            json!({ "guild1RequiredLevel": 3, "guild2RequiredLevel": 0 })
        );
    }
}
