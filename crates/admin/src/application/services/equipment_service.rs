//! Equipment Service - list, create and delete equipment records
//!
//! The backend exposes no update endpoint; editing an existing record means
//! creating a new one from a copy.

use armory_domain::{Equipment, EquipmentId};
use armory_shared::routes;
use serde_json::Value;

use crate::application::api::Api;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct EquipmentService {
    api: Api,
}

impl EquipmentService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch every record. Records that fail to decode are skipped so one
    /// malformed row doesn't hide the rest of the list.
    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, ServiceError> {
        let records: Vec<Value> = self.api.get(routes::EQUIPMENT_LIST).await?;
        let total = records.len();
        let equipment: Vec<Equipment> = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(equipment) => Some(equipment),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable equipment record");
                    None
                }
            })
            .collect();
        tracing::debug!(count = equipment.len(), total, "Fetched equipment");
        Ok(equipment)
    }

    /// Create a record. Any 2xx counts as success; the stored record is
    /// returned only when the backend echoes one back.
    pub async fn create_equipment(
        &self,
        equipment: &Equipment,
    ) -> Result<Option<Equipment>, ServiceError> {
        let body: Value = self.api.post(routes::EQUIPMENT_CREATE, equipment).await?;
        if body.is_null() {
            return Ok(None);
        }
        match serde_json::from_value(body) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                tracing::warn!(error = %e, "Create accepted but response body was not a record");
                Ok(None)
            }
        }
    }

    pub async fn delete_equipment(&self, id: EquipmentId) -> Result<(), ServiceError> {
        Ok(self.api.delete(&routes::equipment_item(id.get())).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::testing::fixtures::{api_rejected, equipment_json};
    use crate::ports::outbound::MockRawApiPort;

    fn service(raw: MockRawApiPort) -> EquipmentService {
        EquipmentService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn list_decodes_backend_records() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == routes::EQUIPMENT_LIST)
            .returning(|_| {
                Ok(Value::Array(vec![
                    equipment_json(1, "Dagger", "Weapon"),
                    equipment_json(2, "Cap", "Helmet"),
                ]))
            });

        let equipment = service(raw).list_equipment().await.unwrap();

        assert_eq!(equipment.len(), 2);
        assert_eq!(equipment[1].equipment_type(), "Helmet");
        assert_eq!(equipment[0].guild_levels.get(1), Some(2));
    }

    #[tokio::test]
    async fn list_skips_records_that_fail_to_decode() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| {
            let mut fractional = equipment_json(2, "Odd Ring", "Ring");
            fractional["value"] = Value::from(2.5);
            Ok(Value::Array(vec![
                equipment_json(1, "Dagger", "Weapon"),
                fractional,
            ]))
        });

        let equipment = service(raw).list_equipment().await.unwrap();

        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].name(), "Dagger");
    }

    #[tokio::test]
    async fn create_posts_the_flattened_record() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == routes::EQUIPMENT_CREATE
                    && body["name"] == "Buckler"
                    && body["guild1RequiredLevel"] == 4
                    && body.get("id").is_none()
            })
            .times(1)
            .returning(|_, body| {
                let mut stored = body.clone();
                stored["id"] = Value::from(42);
                Ok(stored)
            });

        let mut record = Equipment::default();
        record.stats.name = "Buckler".into();
        record.guild_levels.insert(1, 4);

        let created = service(raw).create_equipment(&record).await.unwrap().unwrap();

        assert_eq!(created.id, Some(EquipmentId::new(42)));
        assert_eq!(created.name(), "Buckler");
    }

    #[tokio::test]
    async fn create_with_empty_body_still_succeeds() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| Ok(Value::Null));

        let created = service(raw)
            .create_equipment(&Equipment::default())
            .await
            .unwrap();

        assert_eq!(created, None);
    }

    #[tokio::test]
    async fn create_with_unexpected_body_still_succeeds() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(Value::String("created".into())));

        let created = service(raw)
            .create_equipment(&Equipment::default())
            .await
            .unwrap();

        assert!(created.is_none());
    }

    #[tokio::test]
    async fn create_rejection_keeps_server_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(api_rejected(400, "name must be unique")));

        let err = service(raw)
            .create_equipment(&Equipment::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::ServerError {
                code: armory_shared::ErrorCode::BadRequest,
                message: "name must be unique".into(),
            }
        );
    }

    #[tokio::test]
    async fn delete_targets_the_record_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .withf(|path| path == "/api/equipment/9")
            .times(1)
            .returning(|_| Ok(()));

        service(raw)
            .delete_equipment(EquipmentId::new(9))
            .await
            .unwrap();
    }
}
