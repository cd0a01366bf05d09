//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over response/request types which makes it not
//! object-safe. The composition root needs an abstraction that can be stored
//! behind `Arc<dyn ...>`.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters.
//! The application layer provides a typed wrapper that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
