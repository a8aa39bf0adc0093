//! Data types for content API responses.

use serde::{Deserialize, Serialize};

/// Envelope status reported by the content API in every response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseInfo {
    /// "ok", "not found" or "gone".
    pub status: String,
    /// Human-readable elaboration, present on "gone" responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// A content item, with tags, parts and related links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artefact {
    #[serde(rename = "_response_info", default, skip_serializing_if = "Option::is_none")]
    pub response_info: Option<ResponseInfo>,
    pub title: String,
    #[serde(default)]
    pub format: Option<String>,
    /// Canonical API URL of this artefact.
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub details: ArtefactDetails,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub related: Vec<RelatedArtefact>,
}

/// Format-specific fields of an artefact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtefactDetails {
    #[serde(default)]
    pub need_ids: Vec<String>,
    #[serde(default)]
    pub business_proposition: bool,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub alternative_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub video_summary: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One navigable part of a multi-part guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub body: String,
}

/// A link to another artefact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArtefact {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// A hierarchical category attached to artefacts.
///
/// Parents nest arbitrarily deep via the boxed `parent` reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Canonical API URL of this tag.
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub web_url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub details: TagDetails,
    #[serde(default)]
    pub parent: Option<Box<Tag>>,
    #[serde(default)]
    pub content_with_tag: Option<ContentWithTag>,
    /// "live" or "draft"; absent on live-only payloads.
    #[serde(default)]
    pub state: Option<String>,
}

/// Descriptive fields of a tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagDetails {
    #[serde(rename = "type", default)]
    pub tag_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

/// Link to the listing of content carrying a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentWithTag {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Paginated list envelope used by tag and need listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(rename = "_response_info", default, skip_serializing_if = "Option::is_none")]
    pub response_info: Option<ResponseInfo>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start_index: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_parents_nest() {
        let payload = json!({
            "id": "https://contentapi.test.gov.uk/tags/sections/money%2Ftax.json",
            "slug": "money/tax",
            "title": "Tax",
            "details": { "type": "section" },
            "parent": {
                "id": "https://contentapi.test.gov.uk/tags/sections/money.json",
                "slug": "money",
                "title": "Money",
                "details": { "type": "section" },
                "parent": null
            }
        });

        let tag: Tag = serde_json::from_value(payload).expect("tag should parse");
        assert_eq!(tag.slug, "money/tax");
        let parent = tag.parent.expect("parent should be present");
        assert_eq!(parent.slug, "money");
        assert!(parent.parent.is_none());
    }

    #[test]
    fn paginated_tolerates_missing_envelope_fields() {
        let payload = json!({ "results": [] });
        let page: Paginated<Tag> = serde_json::from_value(payload).expect("page should parse");
        assert_eq!(page.total, 0);
        assert!(page.results.is_empty());
        assert!(page.response_info.is_none());
    }
}
