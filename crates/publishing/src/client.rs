//! REST client for the Publishing API content store endpoints.
//!
//! Wraps `PUT /content{base_path}` using [`reqwest`]. Retries and backoff
//! are not handled here; a failed request is returned to the caller as-is.

use std::time::Duration;

use serde::Serialize;

use crate::config::PublishingApiConfig;
use crate::error::PublishingApiError;

/// HTTP client for a single Publishing API instance.
#[derive(Debug, Clone)]
pub struct PublishingApiClient {
    client: reqwest::Client,
    api_url: String,
    bearer_token: Option<String>,
}

impl PublishingApiClient {
    /// Build a client from configuration, applying the configured timeout.
    pub fn new(config: &PublishingApiConfig) -> Result<Self, PublishingApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.url.clone(),
            config.bearer_token.clone(),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://publishing-api:3093`.
    pub fn with_client(
        client: reqwest::Client,
        api_url: String,
        bearer_token: Option<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Upsert the content item stored at `base_path`.
    ///
    /// Sends `PUT {api_url}/content{base_path}` with the item as the JSON
    /// body. Any 2xx response is success.
    pub async fn put_content_item<T: Serialize + ?Sized>(
        &self,
        base_path: &str,
        item: &T,
    ) -> Result<(), PublishingApiError> {
        let mut request = self.client.put(self.content_url(base_path)).json(item);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::check_status(response).await
    }

    fn content_url(&self, base_path: &str) -> String {
        if base_path.starts_with('/') {
            format!("{}/content{}", self.api_url, base_path)
        } else {
            format!("{}/content/{}", self.api_url, base_path)
        }
    }

    // ---- private helpers ----

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), PublishingApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PublishingApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
