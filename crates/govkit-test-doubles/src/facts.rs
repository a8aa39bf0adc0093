//! Stub rules and fixture payloads for the fact lookup API.

use std::time::Duration;

use serde_json::{json, Value};

use crate::http::MockHttpServer;
use crate::responses::titleize_slug;

/// Build the payload for a fact.
#[must_use]
pub fn fact_body(slug: &str, value: &str, description: &str) -> Value {
    json!({
        "_response_info": {
            "status": "ok"
        },
        "id": slug,
        "title": titleize_slug(slug),
        "details": {
            "value": value,
            "description": description
        }
    })
}

/// Stub helpers for the fact lookup API, bound to a mock server.
pub struct FactsApiStubs<'a> {
    server: &'a MockHttpServer,
}

impl<'a> FactsApiStubs<'a> {
    /// Bind the helpers to `server`.
    #[must_use]
    pub const fn new(server: &'a MockHttpServer) -> Self {
        Self { server }
    }

    fn fact_path(slug: &str) -> String {
        format!("/facts/{}.json", urlencoding::encode(slug))
    }

    /// Stub the fact at `slug`.
    pub async fn has_a_fact(&self, slug: &str, value: &str, description: &str) {
        self.server
            .expect_get(&Self::fact_path(slug))
            .respond_with_json(fact_body(slug, value, description))
            .mount()
            .await;
    }

    /// Stub the fact at `slug` to 404.
    pub async fn does_not_have_a_fact(&self, slug: &str) {
        self.server
            .expect_get(&Self::fact_path(slug))
            .respond_with_status(404)
            .with_json_response(json!({
                "_response_info": {
                    "status": "not found"
                }
            }))
            .mount()
            .await;
    }

    /// Stub the fact at `slug` to fail with `status`.
    pub async fn errors_for_fact(&self, slug: &str, status: u16) {
        self.server
            .expect_get(&Self::fact_path(slug))
            .respond_with_status(status)
            .mount()
            .await;
    }

    /// Stub the fact at `slug` to respond only after `delay`. Combine with
    /// a short client timeout to exercise timeout handling.
    pub async fn times_out_for_fact(&self, slug: &str, delay: Duration) {
        self.server
            .expect_get(&Self::fact_path(slug))
            .respond_with_json(fact_body(slug, "", ""))
            .respond_with_delay(delay)
            .mount()
            .await;
    }
}
