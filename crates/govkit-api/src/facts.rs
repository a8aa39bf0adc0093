//! Fact lookup API client.

use serde::{Deserialize, Serialize};

use crate::content::ResponseInfo;
use crate::error::ApiError;
use crate::json_client::JsonClient;

/// A fact, such as a current rate or statutory figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "_response_info", default, skip_serializing_if = "Option::is_none")]
    pub response_info: Option<ResponseInfo>,
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: FactDetails,
}

/// The value of a fact and its description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactDetails {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Client for the fact lookup API.
pub struct FactsClient {
    client: JsonClient,
}

impl FactsClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: JsonClient::new(base_url),
        }
    }

    /// Create a client over a pre-configured [`JsonClient`].
    #[must_use]
    pub const fn with_client(client: JsonClient) -> Self {
        Self { client }
    }

    /// Look up the fact at `slug`.
    ///
    /// A blank slug returns `Ok(None)` without issuing a request.
    ///
    /// # Errors
    /// Returns an error if the request fails, times out, or the API responds
    /// with a non-2xx status.
    pub async fn fact(&self, slug: &str) -> Result<Option<Fact>, ApiError> {
        if slug.trim().is_empty() {
            return Ok(None);
        }

        let path = format!("/facts/{}.json", urlencoding::encode(slug));
        let fact = self.client.get_json(&path).await?;
        Ok(Some(fact))
    }
}
