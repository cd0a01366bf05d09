//! Guild Service - read-only access to the guild list

use armory_domain::Guild;
use armory_shared::routes;

use crate::application::api::Api;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct GuildService {
    api: Api,
}

impl GuildService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// List all guilds in backend order. Slot numbers for guild requirements
    /// are positions in this list.
    pub async fn list_guilds(&self) -> Result<Vec<Guild>, ServiceError> {
        let guilds: Vec<Guild> = self.api.get(routes::GUILDS_LIST).await?;
        tracing::debug!(count = guilds.len(), "Fetched guilds");
        Ok(guilds)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use armory_domain::GuildId;

    use super::*;
    use crate::infrastructure::testing::fixtures::{api_request_failed, guilds_json};
    use crate::ports::outbound::MockRawApiPort;

    #[tokio::test]
    async fn lists_guilds_in_backend_order() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == routes::GUILDS_LIST)
            .times(1)
            .returning(|_| Ok(guilds_json(&[3, 1, 2])));

        let service = GuildService::new(Api::new(Arc::new(raw)));
        let guilds = service.list_guilds().await.unwrap();

        let ids: Vec<GuildId> = guilds.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![GuildId::new(3), GuildId::new(1), GuildId::new(2)]);
        assert_eq!(guilds[0].display_name(), "Guild 3");
    }

    #[tokio::test]
    async fn surfaces_transport_failures() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Err(api_request_failed("connection refused")));

        let service = GuildService::new(Api::new(Arc::new(raw)));
        let err = service.list_guilds().await.unwrap_err();

        assert!(err.is_transport());
    }
}
