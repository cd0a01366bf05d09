//! Armory Domain - equipment and guild records for the administration client.
//!
//! Pure data and invariants: no I/O, no async.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use entities::{Equipment, EquipmentDraft, EquipmentStats, Guild};
pub use error::DomainError;
pub use ids::{EquipmentId, GuildId};
pub use validation::{ValidationError, ValidationErrors};
pub use value_objects::{
    parse_slot_field_name, slot_field_name, GuildLevelSlots, GuildRequirementRow,
    GuildRequirements, NumericField, TextField, ALIGNMENT_OPTIONS, DEFAULT_ALIGNMENT,
    DEFAULT_HANDEDNESS,
};
