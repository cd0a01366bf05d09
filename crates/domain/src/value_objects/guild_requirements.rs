//! Per-guild required levels, keyed by guild identity.
//!
//! The editor never relies on row position: each level is stored against the
//! guild's ID, and slot numbers are only derived when converting to or from
//! the positional [`GuildLevelSlots`] wire form, against whatever guild list
//! is current at that moment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Guild;
use crate::ids::GuildId;
use crate::validation::ValidationError;

use super::guild_levels::GuildLevelSlots;

/// One guild paired with the level required to use an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildRequirementRow {
    pub guild_id: GuildId,
    pub required_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildRequirements {
    levels: BTreeMap<GuildId, i32>,
}

impl GuildRequirements {
    /// One zero-level row per guild.
    pub fn for_guilds(guilds: &[Guild]) -> Self {
        Self {
            levels: guilds.iter().map(|g| (g.id, 0)).collect(),
        }
    }

    /// Unflatten: guild at index `i` takes `guild{i+1}RequiredLevel`, or 0.
    pub fn from_slots(guilds: &[Guild], slots: &GuildLevelSlots) -> Self {
        Self {
            levels: guilds
                .iter()
                .zip(1u32..)
                .map(|(guild, slot)| (guild.id, slots.get(slot).unwrap_or(0)))
                .collect(),
        }
    }

    /// Flatten: one slot per guild, numbered by the guild's position.
    ///
    /// Guilds without a row (e.g. added to the list after the draft was
    /// built) are sent with level 0.
    pub fn to_slots(&self, guilds: &[Guild]) -> GuildLevelSlots {
        guilds
            .iter()
            .zip(1u32..)
            .map(|(guild, slot)| (slot, self.level_for(guild.id)))
            .collect()
    }

    pub fn level_for(&self, guild_id: GuildId) -> i32 {
        self.levels.get(&guild_id).copied().unwrap_or(0)
    }

    /// Set the level for a guild that has a row. Returns `false` if the
    /// guild is unknown to this draft.
    pub fn set_level(&mut self, guild_id: GuildId, level: i32) -> bool {
        match self.levels.get_mut(&guild_id) {
            Some(slot) => {
                *slot = level;
                true
            }
            None => false,
        }
    }

    /// Rows in the display order of `guilds`.
    pub fn rows(&self, guilds: &[Guild]) -> Vec<GuildRequirementRow> {
        guilds
            .iter()
            .filter(|g| self.levels.contains_key(&g.id))
            .map(|g| GuildRequirementRow {
                guild_id: g.id,
                required_level: self.level_for(g.id),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub(crate) fn validate(&self, errors: &mut Vec<ValidationError>) {
        for (guild_id, level) in &self.levels {
            if *level < 0 {
                errors.push(ValidationError::NegativeGuildLevel {
                    guild_id: *guild_id,
                    value: *level,
                });
            }
        }
    }
}
