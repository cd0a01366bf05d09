//! Endpoint paths of the equipment backend
//!
//! Paths are relative to the configured API base URL.

/// `GET` - every guild, in the backend's canonical order
pub const GUILDS_LIST: &str = "/api/guilds/list";

/// `GET` - every equipment record
pub const EQUIPMENT_LIST: &str = "/api/equipment";

/// `POST` - create an equipment record from a flattened body
pub const EQUIPMENT_CREATE: &str = "/api/equipment/create";

/// `DELETE` path for a single equipment record.
pub fn equipment_item(id: i64) -> String {
    format!("{}/{}", EQUIPMENT_LIST, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(equipment_item(12), "/api/equipment/12");
    }
}
