//! Equipment draft - the editable state behind the equipment form
//!
//! A draft pairs the scalar stats with guild requirements keyed by guild
//! identity. Converting to and from [`Equipment`] is where the positional
//! `guild{N}RequiredLevel` convention is applied, always against the guild
//! list passed in at that moment.

use crate::entities::{Equipment, EquipmentStats, Guild};
use crate::ids::{EquipmentId, GuildId};
use crate::validation::{require_min, require_non_empty, ValidationErrors};
use crate::value_objects::{GuildRequirementRow, GuildRequirements, NumericField, TextField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub stats: EquipmentStats,
    pub guild_requirements: GuildRequirements,
    /// Record this draft was copied from. Submitting still creates a new
    /// record; the backend has no update endpoint.
    pub based_on: Option<EquipmentId>,
}

impl EquipmentDraft {
    /// Blank draft with a zero-level row for each guild.
    pub fn new(guilds: &[Guild]) -> Self {
        Self {
            stats: EquipmentStats::default(),
            guild_requirements: GuildRequirements::for_guilds(guilds),
            based_on: None,
        }
    }

    /// Unflatten a stored record: copy every scalar field and rebuild one
    /// requirement row per guild from its positional slot.
    pub fn from_equipment(equipment: &Equipment, guilds: &[Guild]) -> Self {
        Self {
            stats: equipment.stats.clone(),
            guild_requirements: GuildRequirements::from_slots(guilds, &equipment.guild_levels),
            based_on: equipment.id,
        }
    }

    /// Flatten into a new record: all scalar fields plus exactly one
    /// `guild{N}RequiredLevel` per guild in `guilds`.
    pub fn to_equipment(&self, guilds: &[Guild]) -> Equipment {
        Equipment {
            id: None,
            stats: self.stats.clone(),
            guild_levels: self.guild_requirements.to_slots(guilds),
        }
    }

    pub fn numeric(&self, field: NumericField) -> i32 {
        field.get(&self.stats)
    }

    pub fn set_numeric(&mut self, field: NumericField, value: i32) {
        field.set(&mut self.stats, value);
    }

    pub fn text(&self, field: TextField) -> &str {
        field.get(&self.stats)
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        field.set(&mut self.stats, value);
    }

    pub fn set_guild_level(&mut self, guild_id: GuildId, level: i32) -> bool {
        self.guild_requirements.set_level(guild_id, level)
    }

    pub fn guild_rows(&self, guilds: &[Guild]) -> Vec<GuildRequirementRow> {
        self.guild_requirements.rows(guilds)
    }

    /// Check required fields and lower bounds, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        for field in TextField::ALL {
            if field.is_required() {
                require_non_empty(field.get(&self.stats), field.key(), &mut errors);
            }
        }

        for field in NumericField::ALL {
            if let Some(min) = field.minimum() {
                require_min(field.get(&self.stats), min, field.key(), &mut errors);
            }
        }

        self.guild_requirements.validate(&mut errors);

        ValidationErrors::check(errors)
    }
}
