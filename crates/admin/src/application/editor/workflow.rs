//! Network side of the editor screen.
//!
//! Every failure is logged here and then either swallowed (initial fetch and
//! post-delete refresh) or returned so the caller leaves the editor untouched. Nothing is shown to
//! the user beyond the unchanged screen.

use futures_util::future::join;

use armory_domain::Equipment;

use crate::application::services::{EquipmentService, GuildService};
use crate::application::ServiceError;
use crate::ports::outbound::{Destination, NavigationPort};

use super::state::{ConfirmedDelete, DeleteOutcome, DirectoryData};

#[derive(Clone)]
pub struct EditorWorkflow {
    guilds: GuildService,
    equipment: EquipmentService,
}

impl EditorWorkflow {
    pub fn new(guilds: GuildService, equipment: EquipmentService) -> Self {
        Self { guilds, equipment }
    }

    /// Fetch guilds and equipment concurrently. A failed fetch is logged and
    /// yields an empty list; the other list is still used.
    pub async fn load(&self) -> DirectoryData {
        let (guilds, equipment) =
            join(self.guilds.list_guilds(), self.equipment.list_equipment()).await;

        let guilds = guilds.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching guilds");
            Vec::new()
        });
        let equipment = equipment.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching equipment");
            Vec::new()
        });

        DirectoryData { guilds, equipment }
    }

    /// Create `record` and, once the backend accepts it, return to the main
    /// menu. A rejection leaves the user where they are.
    pub async fn submit(
        &self,
        record: Equipment,
        navigation: &dyn NavigationPort,
    ) -> Result<Option<Equipment>, ServiceError> {
        match self.equipment.create_equipment(&record).await {
            Ok(created) => {
                tracing::info!(
                    id = ?created.as_ref().and_then(|e| e.id),
                    name = %record.name(),
                    "Equipment created"
                );
                navigation.navigate(Destination::MainMenu);
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, name = %record.name(), "Error creating equipment");
                Err(e)
            }
        }
    }

    /// Delete a confirmed record, then re-fetch the list. Only the delete
    /// itself can fail; a failed refresh leaves `refreshed` empty.
    pub async fn delete(&self, confirmed: ConfirmedDelete) -> Result<DeleteOutcome, ServiceError> {
        let id = confirmed.id();
        if let Err(e) = self.equipment.delete_equipment(id).await {
            tracing::error!(error = %e, %id, "Error deleting equipment");
            return Err(e);
        }
        tracing::info!(%id, "Equipment deleted");

        let refreshed = match self.equipment.list_equipment().await {
            Ok(equipment) => Some(equipment),
            Err(e) => {
                tracing::error!(error = %e, "Error refreshing equipment after delete");
                None
            }
        };
        Ok(DeleteOutcome {
            deleted: id,
            refreshed,
        })
    }
}
