//! Shared JSON-over-HTTP client used by every service wrapper.
//!
//! Handles base-URL joining, bearer tokens, per-request timeouts and the
//! mapping from HTTP status codes to [`ApiError`] variants in one place, so
//! the individual service clients stay one-line request/decode wrappers.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::ApiError;

/// Default per-request timeout for service-to-service calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// A JSON API client bound to a single service's base URL.
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    bearer_token: Option<String>,
}

impl JsonClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: client,
            base_url,
            timeout: DEFAULT_TIMEOUT,
            bearer_token: None,
        }
    }

    /// Create a client taking timeout and bearer token from configuration.
    #[must_use]
    pub fn from_config(config: &Config, base_url: impl Into<String>) -> Self {
        let mut client = Self::new(base_url).with_timeout(Duration::from_secs(config.timeout_secs));
        client.bearer_token.clone_from(&config.bearer_token);
        client
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a bearer token to every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Base URL this client is bound to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and deserialize the JSON response body.
    ///
    /// # Errors
    /// Returns an error if the request fails, times out, or the API responds
    /// with a non-2xx status.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_with_query(path, &[]).await
    }

    /// GET `path` with a query string and deserialize the JSON response body.
    ///
    /// # Errors
    /// Returns an error if the request fails, times out, or the API responds
    /// with a non-2xx status.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(base_url = %self.base_url, path, "GET");

        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .timeout(self.timeout);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::decode(path, response).await
    }

    /// POST `body` as JSON to `path` and deserialize the JSON response body.
    ///
    /// # Errors
    /// Returns an error if the request fails, times out, or the API responds
    /// with a non-2xx status.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(base_url = %self.base_url, path, "POST");

        let mut request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .timeout(self.timeout)
            .json(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), path, "non-success response");
            return Err(ApiError::from_status(status, path, message));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = JsonClient::new("http://example.test/");
        assert_eq!(client.base_url(), "http://example.test");

        let client = JsonClient::new("http://example.test");
        assert_eq!(client.base_url(), "http://example.test");
    }

    #[test]
    fn config_supplies_timeout_and_token() {
        let config = Config {
            app_domain: "test.gov.uk".into(),
            timeout_secs: 10,
            bearer_token: Some("secret".into()),
        };
        let client = JsonClient::from_config(&config, "http://example.test");
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert_eq!(client.bearer_token.as_deref(), Some("secret"));
    }
}
