//! API Port - Typed HTTP boundary used by application services

use serde::{de::DeserializeOwned, Serialize};

/// Errors raised at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Typed view of the backend API.
///
/// Generic over request/response types and therefore not object-safe; the
/// object-safe boundary is [`RawApiPort`](super::RawApiPort).
#[async_trait::async_trait]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
