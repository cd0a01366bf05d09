//! Guild entity - an organization that can gate equipment by level

use serde::{Deserialize, Serialize};

use crate::ids::GuildId;

/// A guild as listed by the backend.
///
/// Only the identity matters to the equipment editor; the name is shown
/// when the server provides one. Other server fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: GuildId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Guild {
    pub fn new(id: GuildId) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falling back to the ID.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Guild {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ignores_unknown_server_fields() {
        let guild: Guild = serde_json::from_value(json!({
            "id": 4,
            "name": "Thieves",
            "maxLevel": 50,
        }))
        .unwrap();

        assert_eq!(guild, Guild::new(GuildId::new(4)).with_name("Thieves"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(Guild::new(GuildId::new(2)).display_name(), "Guild 2");
        assert_eq!(
            Guild::new(GuildId::new(2)).with_name("Mages").display_name(),
            "Mages"
        );
    }
}
