//! Domain entities

mod equipment;
mod equipment_draft;
mod guild;

pub use equipment::{Equipment, EquipmentStats};
pub use equipment_draft::EquipmentDraft;
pub use guild::Guild;
