//! Error types shared by every govkit API client.

use thiserror::Error;

/// Errors that can occur when calling a govkit-backed API.
///
/// The 404/410/401 statuses get dedicated variants because consumers branch
/// on them (missing content, archived content, rejected credentials); every
/// other non-2xx status folds into [`ApiError::ErrorResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport layer.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The request hit the client-side timeout.
    #[error("request timed out: {0}")]
    TimedOut(#[source] reqwest::Error),

    /// The resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The resource has been archived (HTTP 410).
    #[error("gone: {0}")]
    Gone(String),

    /// The request was not authorized (HTTP 401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The API returned a non-2xx response not covered by a dedicated variant.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}

impl ApiError {
    /// Map a non-success HTTP status to the matching error variant.
    ///
    /// `resource` is the request path, carried by the variants that identify
    /// what was asked for rather than what the server said.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, resource: &str, message: String) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(resource.to_string()),
            reqwest::StatusCode::GONE => Self::Gone(resource.to_string()),
            reqwest::StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            _ => Self::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimedOut(err)
        } else {
            Self::Request(err)
        }
    }
}
