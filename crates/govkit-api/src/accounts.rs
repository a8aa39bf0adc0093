//! Account API client for session management.
//!
//! The account service fronts an OAuth provider: consumers send users to
//! `auth_uri`, then exchange the callback parameters for an account session.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::json_client::JsonClient;

/// Where to send a user to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInInfo {
    pub auth_uri: String,
    /// Opaque value to round-trip through the OAuth callback.
    #[serde(default)]
    pub state: Option<String>,
}

/// An established account session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub govuk_account_session: String,
    #[serde(default)]
    pub redirect_path: Option<String>,
    #[serde(default)]
    pub ga_client_id: Option<String>,
}

/// Handle for attributes captured before a user finished registering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationState {
    pub state_id: String,
}

#[derive(Serialize)]
struct CallbackRequest<'a> {
    code: &'a str,
    state: &'a str,
}

#[derive(Serialize)]
struct RegistrationStateRequest<'a> {
    attributes: &'a Value,
}

/// Client for the account session API.
pub struct AccountClient {
    client: JsonClient,
}

impl AccountClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: JsonClient::new(base_url),
        }
    }

    /// Create a client over a pre-configured [`JsonClient`].
    ///
    /// Use this to attach the bearer token the account service requires
    /// between applications.
    #[must_use]
    pub const fn with_client(client: JsonClient) -> Self {
        Self { client }
    }

    /// Get the URL a user should be sent to in order to sign in.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API responds with a
    /// non-2xx status.
    pub async fn sign_in_url(&self) -> Result<SignInInfo, ApiError> {
        self.client.get_json("/api/oauth2/sign-in").await
    }

    /// Exchange OAuth callback parameters for an account session.
    ///
    /// # Errors
    /// Returns [`ApiError::Unauthorized`] if the provider rejects the
    /// parameters, or another [`ApiError`] variant on transport/API failure.
    pub async fn validate_auth_response(
        &self,
        code: &str,
        state: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.client
            .post_json("/api/oauth2/callback", &CallbackRequest { code, state })
            .await
    }

    /// Store attributes for a user who has not finished registering.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API responds with a
    /// non-2xx status.
    pub async fn create_registration_state(
        &self,
        attributes: &Value,
    ) -> Result<RegistrationState, ApiError> {
        self.client
            .post_json("/api/oauth2/state", &RegistrationStateRequest { attributes })
            .await
    }
}
