//! HTTP adapter for the equipment backend
//!
//! Implements [`RawApiPort`] over reqwest. Failed responses are turned into
//! [`ApiError::HttpError`] carrying the server's own message when the body
//! has one.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use armory_shared::ErrorBody;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Client for the equipment backend's REST API
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    /// Create an adapter rooted at `base_url`. Requests have no timeout
    /// unless one is given.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Append an absolute API path to the base URL, keeping any path prefix
    /// the base URL already has.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                message: ErrorBody::message_from(&raw),
            });
        }

        Ok(response)
    }

    /// Read a JSON body; an empty body reads as `null`.
    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(method = "GET", %url, "API request");

        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(method = "POST", %url, "API request");

        let response = self.send(self.client.post(url).json(body)).await?;
        Self::read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path)?;
        tracing::debug!(method = "DELETE", %url, "API request");

        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base: &str) -> ApiAdapter {
        ApiAdapter::new(Url::parse(base).unwrap(), None)
    }

    #[test]
    fn joins_paths_onto_bare_host() {
        let url = adapter("http://localhost:8080").url("/api/guilds/list").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/guilds/list");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let url = adapter("https://example.com/armory/").url("/api/equipment/7").unwrap();
        assert_eq!(url.as_str(), "https://example.com/armory/api/equipment/7");
    }
}
