//! Equipment editor components

mod confirm_delete_modal;
mod equipment_form;
mod equipment_list;
mod guild_requirements;

pub use confirm_delete_modal::ConfirmDeleteModal;
pub use equipment_form::EquipmentForm;
pub use equipment_list::EquipmentList;
pub use guild_requirements::GuildRequirementsEditor;
