//! Integration tests for the account session client using HTTP stubbing.

use govkit_api::accounts::AccountClient;
use govkit_api::error::ApiError;
use govkit_api::json_client::JsonClient;
use govkit_test_doubles::accounts::{AccountApiStubs, PLACEHOLDER_SESSION_ID};
use govkit_test_doubles::MockHttpServer;
use serde_json::json;

#[tokio::test]
async fn gets_a_sign_in_url() {
    let server = MockHttpServer::start().await;
    AccountApiStubs::new(&server)
        .get_sign_in_url("https://www.example.com", "state-123")
        .await;

    let client = AccountClient::new(server.url());
    let info = client.sign_in_url().await.expect("should succeed");

    assert_eq!(info.auth_uri, "https://www.example.com");
    assert_eq!(info.state.as_deref(), Some("state-123"));
}

#[tokio::test]
async fn valid_auth_response_yields_a_session() {
    let server = MockHttpServer::start().await;
    AccountApiStubs::new(&server)
        .validates_auth_response("foo", "bar")
        .await;

    let client = AccountClient::new(server.url());
    let session = client
        .validate_auth_response("foo", "bar")
        .await
        .expect("should succeed");

    assert_eq!(session.govuk_account_session, PLACEHOLDER_SESSION_ID);
    assert_eq!(session.redirect_path.as_deref(), Some("/"));
}

#[tokio::test]
async fn rejected_auth_response_is_unauthorized() {
    let server = MockHttpServer::start().await;
    AccountApiStubs::new(&server)
        .rejects_auth_response("foo", "bar")
        .await;

    let client = AccountClient::new(server.url());
    let result = client.validate_auth_response("foo", "bar").await;

    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
}

#[tokio::test]
async fn creates_a_registration_state() {
    let server = MockHttpServer::start().await;
    AccountApiStubs::new(&server)
        .creates_registration_state(json!({ "foo": "bar" }), "state-id")
        .await;

    let client = AccountClient::new(server.url());
    let state = client
        .create_registration_state(&json!({ "foo": "bar" }))
        .await
        .expect("should succeed");

    assert_eq!(state.state_id, "state-id");
}

#[tokio::test]
async fn bearer_tokens_are_attached() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/api/oauth2/sign-in")
        .with_header("Authorization", "Bearer test-token")
        .respond_with_json(json!({ "auth_uri": "https://www.example.com" }))
        .mount()
        .await;

    let json_client = JsonClient::new(server.url()).with_bearer_token("test-token");
    let client = AccountClient::with_client(json_client);

    let info = client.sign_in_url().await.expect("should succeed");
    assert_eq!(info.auth_uri, "https://www.example.com");
    assert!(info.state.is_none());
}

#[tokio::test]
async fn mismatched_callback_parameters_do_not_match_the_stub() {
    let server = MockHttpServer::start().await;
    AccountApiStubs::new(&server)
        .validates_auth_response("expected-code", "expected-state")
        .await;

    let client = AccountClient::new(server.url());
    let result = client.validate_auth_response("wrong-code", "wrong-state").await;

    // Unmatched requests fall through to the mock server's 404.
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}
