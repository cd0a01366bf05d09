//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn api_rejected(status: u16, msg: &str) -> ApiError {
    ApiError::HttpError {
        status,
        message: msg.to_string(),
    }
}

/// Guild list as returned by the backend, in backend order.
pub fn guilds_json(ids: &[i64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({ "id": id, "name": format!("Guild {}", id) }))
            .collect(),
    )
}

/// A stored equipment record with the given id and type.
pub fn equipment_json(id: i64, name: &str, equipment_type: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": equipment_type,
        "handedness": 1,
        "damageMin": 1,
        "damageMax": 4,
        "alignment": "Neutral",
        "value": 10,
        "isCursed": false,
        "guild1RequiredLevel": 2,
    })
}
