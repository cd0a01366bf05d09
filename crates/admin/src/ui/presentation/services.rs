//! Service providers for the presentation layer
//!
//! The composition root places one [`Services`] bundle in Dioxus context.
//! Components reach services through the hooks below and never see the HTTP
//! adapter.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::api::Api;
use crate::application::editor::EditorWorkflow;
use crate::application::services::{EquipmentService, GuildService};

#[derive(Clone)]
pub struct Services {
    pub editor: Arc<EditorWorkflow>,
}

impl Services {
    pub fn new(api: Api) -> Self {
        let guild = GuildService::new(api.clone());
        let equipment = EquipmentService::new(api);
        Self {
            editor: Arc::new(EditorWorkflow::new(guild, equipment)),
        }
    }
}

/// Hook to access the editor workflow from context
pub fn use_editor_workflow() -> Arc<EditorWorkflow> {
    let services = use_context::<Services>();
    services.editor.clone()
}
