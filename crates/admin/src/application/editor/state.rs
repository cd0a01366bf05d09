use armory_domain::{
    Equipment, EquipmentDraft, EquipmentId, Guild, GuildId, NumericField, TextField,
    ValidationErrors,
};

/// Lifecycle of the editor screen.
///
/// Selecting a record needs the guild list, so it is refused until the
/// initial fetch has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Guilds and equipment fetched when the screen opens. Either list is empty
/// if its fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryData {
    pub guilds: Vec<Guild>,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Guilds have not finished loading")]
    NotReady,
}

/// Proof that the user confirmed deleting a record.
///
/// Only [`EquipmentEditor::confirm_delete`] creates one, so a delete request
/// cannot be issued without going through the confirmation step.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: EquipmentId,
}

impl ConfirmedDelete {
    pub fn id(&self) -> EquipmentId {
        self.id
    }
}

/// Result of a delete the backend accepted.
///
/// `refreshed` is `None` when re-fetching the list failed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub deleted: EquipmentId,
    pub refreshed: Option<Vec<Equipment>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentEditor {
    phase: EditorPhase,
    guilds: Vec<Guild>,
    all_equipment: Vec<Equipment>,
    filtered_equipment: Vec<Equipment>,
    type_filter: String,
    draft: EquipmentDraft,
    pending_delete: Option<EquipmentId>,
    validation: Option<ValidationErrors>,
}

impl EquipmentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == EditorPhase::Ready
    }

    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    pub fn all_equipment(&self) -> &[Equipment] {
        &self.all_equipment
    }

    pub fn filtered_equipment(&self) -> &[Equipment] {
        &self.filtered_equipment
    }

    pub fn type_filter(&self) -> &str {
        &self.type_filter
    }

    pub fn draft(&self) -> &EquipmentDraft {
        &self.draft
    }

    pub fn pending_delete(&self) -> Option<EquipmentId> {
        self.pending_delete
    }

    /// Errors from the last rejected submit, cleared by the next edit.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        self.validation.as_ref()
    }

    pub fn begin_loading(&mut self) {
        self.phase = EditorPhase::Loading;
    }

    /// Store the fetched lists and start a blank draft with one row per guild.
    pub fn finish_loading(&mut self, data: DirectoryData) {
        self.guilds = data.guilds;
        self.draft = EquipmentDraft::new(&self.guilds);
        self.validation = None;
        self.replace_equipment(data.equipment);
        self.phase = EditorPhase::Ready;
    }

    /// Replace the known records and re-apply the current filter.
    pub fn replace_equipment(&mut self, equipment: Vec<Equipment>) {
        self.all_equipment = equipment;
        self.refilter();
    }

    /// Show only records whose type equals `equipment_type` exactly.
    /// An empty filter shows everything.
    pub fn apply_filter(&mut self, equipment_type: &str) {
        self.type_filter = equipment_type.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered_equipment = if self.type_filter.is_empty() {
            self.all_equipment.clone()
        } else {
            self.all_equipment
                .iter()
                .filter(|e| e.equipment_type() == self.type_filter)
                .cloned()
                .collect()
        };
    }

    /// Load a copy of `equipment` into the draft.
    pub fn select(&mut self, equipment: &Equipment) -> Result<(), EditorError> {
        if !self.is_ready() {
            return Err(EditorError::NotReady);
        }
        self.draft = EquipmentDraft::from_equipment(equipment, &self.guilds);
        self.validation = None;
        Ok(())
    }

    /// Discard the draft and start over from defaults.
    pub fn reset_draft(&mut self) {
        self.draft = EquipmentDraft::new(&self.guilds);
        self.validation = None;
    }

    pub fn set_numeric(&mut self, field: NumericField, value: i32) {
        self.draft.set_numeric(field, value);
        self.validation = None;
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.draft.set_text(field, value);
        self.validation = None;
    }

    pub fn set_cursed(&mut self, cursed: bool) {
        self.draft.stats.is_cursed = cursed;
        self.validation = None;
    }

    pub fn set_guild_level(&mut self, guild_id: GuildId, level: i32) -> bool {
        self.validation = None;
        self.draft.set_guild_level(guild_id, level)
    }

    /// Validate the draft and flatten it into the record to send.
    ///
    /// On failure the errors are kept for display and nothing is sent.
    pub fn prepare_submission(&mut self) -> Result<Equipment, ValidationErrors> {
        if let Err(errors) = self.draft.validate() {
            tracing::warn!(errors = %errors, "Equipment form rejected");
            self.validation = Some(errors.clone());
            return Err(errors);
        }
        self.validation = None;
        Ok(self.draft.to_equipment(&self.guilds))
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: EquipmentId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the pending delete, if there is one.
    pub fn confirm_delete(&mut self) -> Option<ConfirmedDelete> {
        self.pending_delete.take().map(|id| ConfirmedDelete { id })
    }

    /// Drop the deleted record, then take the refreshed list if there is one.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome) {
        match outcome.refreshed {
            Some(equipment) => self.all_equipment = equipment,
            None => self.all_equipment.retain(|e| e.id != Some(outcome.deleted)),
        }
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, equipment_type: &str) -> Equipment {
        let mut equipment = Equipment::default();
        equipment.id = Some(EquipmentId::new(id));
        equipment.stats.name = format!("Item {}", id);
        equipment.stats.equipment_type = equipment_type.to_string();
        equipment
    }

    fn guilds(ids: &[i64]) -> Vec<Guild> {
        ids.iter().map(|id| Guild::new(GuildId::new(*id))).collect()
    }

    fn ready_editor() -> EquipmentEditor {
        let mut editor = EquipmentEditor::new();
        editor.begin_loading();
        editor.finish_loading(DirectoryData {
            guilds: guilds(&[1, 2]),
            equipment: vec![item(1, "Weapon"), item(2, "Helmet"), item(3, "Weapon")],
        });
        editor
    }

    fn ids(items: &[Equipment]) -> Vec<i64> {
        items.iter().filter_map(|e| e.id.map(EquipmentId::get)).collect()
    }

    #[test]
    fn loading_builds_a_blank_draft_for_every_guild() {
        let editor = ready_editor();

        assert!(editor.is_ready());
        assert_eq!(editor.draft().guild_rows(editor.guilds()).len(), 2);
        assert_eq!(ids(editor.filtered_equipment()), vec![1, 2, 3]);
    }

    #[test]
    fn filter_matches_type_exactly() {
        let mut editor = ready_editor();

        editor.apply_filter("Weapon");
        assert_eq!(ids(editor.filtered_equipment()), vec![1, 3]);

        editor.apply_filter("weapon");
        assert!(editor.filtered_equipment().is_empty());

        editor.apply_filter("");
        assert_eq!(ids(editor.filtered_equipment()), vec![1, 2, 3]);
        assert_eq!(editor.all_equipment().len(), 3);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut editor = ready_editor();
        editor.apply_filter("Helmet");
        let once = editor.filtered_equipment().to_vec();
        editor.apply_filter("Helmet");

        assert_eq!(editor.filtered_equipment(), once.as_slice());
    }

    #[test]
    fn replacing_the_list_keeps_the_filter() {
        let mut editor = ready_editor();
        editor.apply_filter("Weapon");

        editor.replace_equipment(vec![item(3, "Weapon"), item(4, "Boots")]);

        assert_eq!(ids(editor.filtered_equipment()), vec![3]);
    }

    #[test]
    fn select_before_ready_is_refused() {
        let mut editor = EquipmentEditor::new();
        editor.begin_loading();

        assert_eq!(editor.select(&item(1, "Weapon")), Err(EditorError::NotReady));
        assert_eq!(editor.draft(), &EquipmentDraft::default());
    }

    #[test]
    fn select_copies_the_record_into_the_draft() {
        let mut editor = ready_editor();
        let mut source = item(7, "Shield");
        source.guild_levels.insert(2, 5);

        editor.select(&source).unwrap();

        assert_eq!(editor.draft().based_on, Some(EquipmentId::new(7)));
        assert_eq!(editor.draft().stats, source.stats);
        assert_eq!(editor.draft().text(TextField::Type), "Shield");
        assert_eq!(editor.draft().guild_requirements.level_for(GuildId::new(2)), 5);
    }

    #[test]
    fn rejected_submission_is_recorded_until_next_edit() {
        let mut editor = ready_editor();

        let errors = editor.prepare_submission().unwrap_err();
        assert!(errors.has_field("name"));
        assert!(editor.validation_errors().is_some());

        editor.set_text(TextField::Name, "Dagger");
        assert!(editor.validation_errors().is_none());
    }

    #[test]
    fn toggling_cursed_clears_recorded_errors() {
        let mut editor = ready_editor();
        editor.prepare_submission().unwrap_err();

        editor.set_cursed(true);

        assert!(editor.validation_errors().is_none());
        assert!(editor.draft().stats.is_cursed);
    }

    #[test]
    fn accepted_submission_flattens_one_slot_per_guild() {
        let mut editor = ready_editor();
        editor.set_text(TextField::Name, "Dagger");
        editor.set_text(TextField::Type, "Weapon");
        editor.set_guild_level(GuildId::new(2), 3);

        let record = editor.prepare_submission().unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.guild_levels.len(), 2);
        assert_eq!(record.guild_levels.get(2), Some(3));
    }

    #[test]
    fn reset_discards_the_copy() {
        let mut editor = ready_editor();
        editor.select(&item(2, "Helmet")).unwrap();

        editor.reset_draft();

        assert_eq!(editor.draft(), &EquipmentDraft::new(editor.guilds()));
    }

    #[test]
    fn delete_needs_a_pending_request() {
        let mut editor = ready_editor();
        assert_eq!(editor.confirm_delete(), None);

        editor.request_delete(EquipmentId::new(2));
        editor.cancel_delete();
        assert_eq!(editor.confirm_delete(), None);

        editor.request_delete(EquipmentId::new(2));
        let confirmed = editor.confirm_delete().unwrap();
        assert_eq!(confirmed.id(), EquipmentId::new(2));
        assert_eq!(editor.pending_delete(), None);
    }

    #[test]
    fn delete_without_refresh_drops_only_that_row() {
        let mut editor = ready_editor();
        editor.apply_filter("Weapon");

        editor.apply_delete(DeleteOutcome {
            deleted: EquipmentId::new(1),
            refreshed: None,
        });

        assert_eq!(ids(editor.all_equipment()), vec![2, 3]);
        assert_eq!(ids(editor.filtered_equipment()), vec![3]);
    }

    #[test]
    fn delete_with_refresh_takes_the_new_list() {
        let mut editor = ready_editor();

        editor.apply_delete(DeleteOutcome {
            deleted: EquipmentId::new(1),
            refreshed: Some(vec![item(2, "Helmet"), item(9, "Boots")]),
        });

        assert_eq!(ids(editor.filtered_equipment()), vec![2, 9]);
    }
}
