//! Response types returned by the equipment backend
//!
//! Successful responses carry the records themselves (see `armory-domain`).
//! Failed responses carry the backend's JSON error body, described here.

use serde::{Deserialize, Serialize};

// =============================================================================
// Error Code
// =============================================================================

/// Classification of a failed response, derived from its HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// Request was malformed or failed server-side validation
    BadRequest,
    /// Authentication required or failed
    Unauthorized,
    /// User lacks permission for this operation
    Forbidden,
    /// Requested resource not found
    NotFound,
    /// Operation conflicts with current state
    Conflict,

    // === Server Errors (5xx) ===
    /// Internal server error
    InternalError,
    /// Required service is unavailable
    ServiceUnavailable,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            500 => Self::InternalError,
            502..=504 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// JSON body the backend sends with non-2xx responses.
///
/// Every field is optional; proxies and older endpoints send partial bodies
/// or plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message for a raw response body: the `message`
    /// field, then `error`, then the raw text itself.
    pub fn message_from(raw: &str) -> String {
        let parsed = serde_json::from_str::<ErrorBody>(raw).ok();
        parsed
            .and_then(|body| {
                non_blank(body.message).or_else(|| non_blank(body.error))
            })
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
