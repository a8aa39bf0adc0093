//! Declarative HTTP stubbing over `wiremock`.
//!
//! # Quick Start
//!
//! ```ignore
//! use govkit_test_doubles::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let mock = MockHttpServer::start().await;
//!
//!     mock.expect_get("/api/users")
//!         .respond_with_json(json!({"users": []}))
//!         .mount()
//!         .await;
//!
//!     // Your code calls mock.url("/api/users")
//!     // Assertions verify the mock was called
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`, optionally `.with_json_response(body)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` to assert call count

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrapper around [`wiremock::MockServer`] for declarative HTTP stubbing.
pub struct MockHttpServer {
    inner: MockServer,
}

impl MockHttpServer {
    /// Start a mock server on a random local port.
    pub async fn start() -> Self {
        Self {
            inner: MockServer::start().await,
        }
    }

    /// Base URL of the running server.
    #[must_use]
    pub fn url(&self) -> String {
        self.inner.uri()
    }

    /// Access the underlying wiremock server, for matchers this wrapper
    /// does not cover.
    #[must_use]
    pub const fn inner(&self) -> &MockServer {
        &self.inner
    }

    /// Assert that all mounted expectations were met.
    pub async fn verify(&self) {
        self.inner.verify().await;
    }

    /// Begin a stub rule for GET requests to `request_path`.
    #[must_use]
    pub fn expect_get(&self, request_path: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.inner, "GET", request_path)
    }

    /// Begin a stub rule for POST requests to `request_path`.
    #[must_use]
    pub fn expect_post(&self, request_path: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.inner, "POST", request_path)
    }
}

/// Builder for a single stub rule.
///
/// `with_*` calls narrow which requests the rule matches; `respond_with_*`
/// calls shape the canned response; [`StubBuilder::mount`] registers the
/// rule. Query matching is hash-including: extra request parameters do not
/// prevent a match.
#[must_use]
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    method: &'static str,
    path: String,
    headers: Vec<(String, String)>,
    query_params: Vec<(String, String)>,
    missing_query_params: Vec<String>,
    request_body: Option<Value>,
    status: u16,
    body_json: Option<Value>,
    body_string: Option<String>,
    delay: Option<Duration>,
    expected_calls: Option<u64>,
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a MockServer, http_method: &'static str, request_path: &str) -> Self {
        Self {
            server,
            method: http_method,
            path: request_path.to_string(),
            headers: Vec::new(),
            query_params: Vec::new(),
            missing_query_params: Vec::new(),
            request_body: None,
            status: 200,
            body_json: None,
            body_string: None,
            delay: None,
            expected_calls: None,
        }
    }

    /// Require a request header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Require a query parameter.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query_params.push((name.to_string(), value.to_string()));
        self
    }

    /// Require that `name` is absent from the query string. Keeps
    /// overlapping rules from shadowing each other.
    pub fn without_query_param(mut self, name: &str) -> Self {
        self.missing_query_params.push(name.to_string());
        self
    }

    /// Require an exact JSON request body.
    pub fn with_body_json(mut self, body: Value) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Respond 200 with a JSON body.
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.status = 200;
        self.body_json = Some(body);
        self
    }

    /// Set the response status without touching the body.
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set a JSON response body without touching the status.
    pub fn with_json_response(mut self, body: Value) -> Self {
        self.body_json = Some(body);
        self
    }

    /// Respond with a plain string body.
    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body_string = Some(body.into());
        self
    }

    /// Delay the response. Combine with a short client timeout to simulate
    /// a request that times out.
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Expect the rule to be matched exactly `times` times; checked by
    /// [`MockHttpServer::verify`] and when the server drops.
    pub fn expect_times(mut self, times: u64) -> Self {
        self.expected_calls = Some(times);
        self
    }

    /// Register the stub rule with the server.
    pub async fn mount(self) {
        let mut rule = Mock::given(method(self.method)).and(path(self.path));
        for (name, value) in &self.headers {
            rule = rule.and(header(name.as_str(), value.as_str()));
        }
        for (name, value) in &self.query_params {
            rule = rule.and(query_param(name.as_str(), value.as_str()));
        }
        for name in &self.missing_query_params {
            rule = rule.and(query_param_is_missing(name.as_str()));
        }
        if let Some(body) = &self.request_body {
            rule = rule.and(body_json(body));
        }

        let mut template = ResponseTemplate::new(self.status);
        if let Some(body) = self.body_json {
            template = template.set_body_json(body);
        }
        if let Some(body) = self.body_string {
            template = template.set_body_string(body);
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = rule.respond_with(template);
        if let Some(times) = self.expected_calls {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
