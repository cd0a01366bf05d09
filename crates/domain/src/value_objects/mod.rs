//! Value objects

mod equipment_fields;
mod guild_levels;
mod guild_requirements;

pub use equipment_fields::{
    NumericField, TextField, ALIGNMENT_OPTIONS, DEFAULT_ALIGNMENT, DEFAULT_HANDEDNESS,
};
pub use guild_levels::{parse_slot_field_name, slot_field_name, GuildLevelSlots};
pub use guild_requirements::{GuildRequirementRow, GuildRequirements};
