//! Editor screen state
//!
//! Wraps [`EquipmentEditor`] in a signal so every component on the screen
//! re-renders from the same copy.

use dioxus::prelude::*;

use armory_domain::{Equipment, EquipmentId, GuildId, NumericField, TextField};

use crate::application::editor::{ConfirmedDelete, DeleteOutcome, DirectoryData, EquipmentEditor};

#[derive(Clone, Copy)]
pub struct EditorState {
    pub editor: Signal<EquipmentEditor>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            editor: Signal::new(EquipmentEditor::new()),
        }
    }

    pub fn begin_loading(&mut self) {
        self.editor.write().begin_loading();
    }

    pub fn finish_loading(&mut self, data: DirectoryData) {
        self.editor.write().finish_loading(data);
    }

    pub fn apply_filter(&mut self, equipment_type: &str) {
        self.editor.write().apply_filter(equipment_type);
    }

    /// Copy a record into the form. Ignored (and logged) while loading.
    pub fn select(&mut self, equipment: &Equipment) {
        if let Err(e) = self.editor.write().select(equipment) {
            tracing::warn!(error = %e, id = ?equipment.id, "Equipment selection ignored");
        }
    }

    pub fn reset_draft(&mut self) {
        self.editor.write().reset_draft();
    }

    pub fn set_numeric(&mut self, field: NumericField, value: i32) {
        self.editor.write().set_numeric(field, value);
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        self.editor.write().set_text(field, value);
    }

    pub fn set_cursed(&mut self, cursed: bool) {
        self.editor.write().set_cursed(cursed);
    }

    pub fn set_guild_level(&mut self, guild_id: GuildId, level: i32) {
        if !self.editor.write().set_guild_level(guild_id, level) {
            tracing::warn!(%guild_id, "No requirement row for guild");
        }
    }

    /// Validated record ready to send, or `None` if the form has errors.
    pub fn prepare_submission(&mut self) -> Option<Equipment> {
        self.editor.write().prepare_submission().ok()
    }

    pub fn request_delete(&mut self, id: EquipmentId) {
        self.editor.write().request_delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.editor.write().cancel_delete();
    }

    pub fn confirm_delete(&mut self) -> Option<ConfirmedDelete> {
        self.editor.write().confirm_delete()
    }

    pub fn apply_delete(&mut self, outcome: DeleteOutcome) {
        self.editor.write().apply_delete(outcome);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
