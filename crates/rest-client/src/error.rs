//! REST client error types.

use thiserror::Error;

/// Transport-level failures.
///
/// A response with a non-2xx status is not an error at this layer: it is
/// returned as an [`HttpResponse`](crate::HttpResponse) for the caller to
/// classify.
#[derive(Debug, Error)]
pub enum RestError {
    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (DNS, refused, TLS, reset).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to build the HTTP request.
    #[error("Request build error: {0}")]
    RequestBuild(String),

    /// Failed to read the response body.
    #[error("Response body error: {0}")]
    Body(String),
}

impl RestError {
    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Timeout)
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_connect() {
            RestError::Connection(err.to_string())
        } else if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else if err.is_body() || err.is_decode() {
            RestError::Body(err.to_string())
        } else {
            RestError::Connection(err.to_string())
        }
    }
}
