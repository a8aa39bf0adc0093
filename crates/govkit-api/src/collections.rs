//! Collections API client for curated content lists.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::content::ContentWithTag;
use crate::error::ApiError;
use crate::json_client::JsonClient;

/// Curated content lists for a browse page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedContent {
    pub base_path: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public_updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub parent: Option<ParentSection>,
    #[serde(default)]
    pub details: CuratedContentDetails,
}

/// The section a curated page hangs under.
///
/// Unlike content API tags, parents here carry no slug of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentSection {
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: ParentSectionDetails,
    #[serde(default)]
    pub content_with_tag: Option<ContentWithTag>,
    #[serde(default)]
    pub parent: Option<Box<ParentSection>>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Descriptive fields of a parent section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentSectionDetails {
    #[serde(rename = "type", default)]
    pub section_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

/// Grouped content listings of a curated page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuratedContentDetails {
    #[serde(default)]
    pub groups: Vec<ContentGroup>,
}

/// A named list of curated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentGroup {
    pub name: String,
    #[serde(default)]
    pub contents: Vec<GroupContent>,
}

/// One entry in a curated group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupContent {
    pub web_url: String,
    pub title: String,
}

/// Client for the collections API.
pub struct CollectionsClient {
    client: JsonClient,
}

impl CollectionsClient {
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

    /// Get the curated lists for the browse page at `base_path`.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when no curated lists exist for the
    /// path, or another [`ApiError`] variant on transport/API failure.
    pub async fn curated_lists_for(&self, base_path: &str) -> Result<CuratedContent, ApiError> {
        let path = format!("/specialist-sectors{base_path}");
        self.client.get_json(&path).await
    }
}
