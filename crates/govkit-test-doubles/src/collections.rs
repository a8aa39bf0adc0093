//! Stub rules and fixture payloads for the collections API.

use serde_json::{json, Value};

use crate::http::MockHttpServer;

/// Build the canned curated-content payload for a browse page.
#[must_use]
pub fn curated_content_body(base_path: &str) -> Value {
    json!({
        "base_path": base_path,
        "title": "Example title",
        "description": "example description",
        "public_updated_at": "2014-03-04T13:58:11+00:00",
        "parent": {
            "id": "http://example.com/oil-and-gas",
            "web_url": "http://example.com/browse/oil-and-gas",
            "details": {
                "description": null,
                "short_description": null,
                "type": "section",
            },
            "content_with_tag": {
                "id": "http://example.com/with_tag.json?section=oil-and-gas",
                "web_url": "http://example.com/browse/oil-and-gas"
            },
            "parent": null,
            "title": "Oil and gas",
            "state": "live",
        },
        "details": {
            "groups": [
                // Curated content, excluding anything untagged
                {
                    "name": "Oil rigs",
                    "contents": [
                        {
                            "web_url": "http://example.com/api/oil-rig-safety-requirements.json",
                            "title": "Oil rig safety requirements",
                        },
                        {
                            "web_url": "http://example.com/api/oil-rig-staffing.json",
                            "title": "Oil rig staffing",
                        }
                    ]
                },
                {
                    "name": "Piping",
                    "contents": [
                        {
                            "web_url": "http://example.com/api/undersea-piping-restrictions.json",
                            "title": "Undersea piping restrictions",
                        }
                    ]
                },
                // Uncurated content
                {
                    "name": "Other",
                    "contents": [
                        {
                            "web_url": "http://example.com/api/north-sea-shipping-lanes.json",
                            "title": "North sea shipping lanes",
                        }
                    ]
                }
            ]
        }
    })
}

/// Stub helpers for the collections API, bound to a mock server.
pub struct CollectionsApiStubs<'a> {
    server: &'a MockHttpServer,
}

impl<'a> CollectionsApiStubs<'a> {
    /// Bind the helpers to `server`.
    #[must_use]
    pub const fn new(server: &'a MockHttpServer) -> Self {
        Self { server }
    }

    /// Stub the curated lists for `base_path` with the canned payload.
    pub async fn has_curated_lists_for(&self, base_path: &str) {
        self.server
            .expect_get(&format!("/specialist-sectors{base_path}"))
            .respond_with_json(curated_content_body(base_path))
            .mount()
            .await;
    }

    /// Stub `base_path` to have no curated lists (404).
    pub async fn has_no_curated_lists_for(&self, base_path: &str) {
        self.server
            .expect_get(&format!("/specialist-sectors{base_path}"))
            .respond_with_status(404)
            .mount()
            .await;
    }
}
