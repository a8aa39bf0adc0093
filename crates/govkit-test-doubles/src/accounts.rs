//! Stub rules for the account session API.

use serde_json::{json, Value};

use crate::http::MockHttpServer;

/// Session ID the validation stub hands out.
pub const PLACEHOLDER_SESSION_ID: &str = "placeholder-session-id";

/// Stub helpers for the account session API, bound to a mock server.
pub struct AccountApiStubs<'a> {
    server: &'a MockHttpServer,
}

impl<'a> AccountApiStubs<'a> {
    /// Bind the helpers to `server`.
    #[must_use]
    pub const fn new(server: &'a MockHttpServer) -> Self {
        Self { server }
    }

    /// Stub the sign-in URL lookup.
    pub async fn get_sign_in_url(&self, auth_uri: &str, state: &str) {
        self.server
            .expect_get("/api/oauth2/sign-in")
            .respond_with_json(json!({
                "auth_uri": auth_uri,
                "state": state
            }))
            .mount()
            .await;
    }

    /// Stub the OAuth callback to accept `code` and `state` and hand out a
    /// session.
    pub async fn validates_auth_response(&self, code: &str, state: &str) {
        self.server
            .expect_post("/api/oauth2/callback")
            .with_body_json(json!({ "code": code, "state": state }))
            .respond_with_json(json!({
                "govuk_account_session": PLACEHOLDER_SESSION_ID,
                "redirect_path": "/",
                "ga_client_id": "ga-client-id"
            }))
            .mount()
            .await;
    }

    /// Stub the OAuth callback to reject `code` and `state` with a 401.
    pub async fn rejects_auth_response(&self, code: &str, state: &str) {
        self.server
            .expect_post("/api/oauth2/callback")
            .with_body_json(json!({ "code": code, "state": state }))
            .respond_with_status(401)
            .mount()
            .await;
    }

    /// Stub registration-state creation for `attributes`.
    pub async fn creates_registration_state(&self, attributes: Value, state_id: &str) {
        self.server
            .expect_post("/api/oauth2/state")
            .with_body_json(json!({ "attributes": attributes }))
            .respond_with_json(json!({ "state_id": state_id }))
            .mount()
            .await;
    }
}
