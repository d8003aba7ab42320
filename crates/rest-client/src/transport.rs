//! The HTTP collaborator used by signed API clients.

use crate::error::RestError;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// HTTP method used to transmit a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters sent as the query string.
    Get,
    /// Parameters sent as a JSON object body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Raw HTTP response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// An HTTP client capable of GET with a query string and POST with a JSON
/// body, each bounded by a per-request timeout.
///
/// Implementations report transport failures as [`RestError`] and return
/// every received response, whatever its status.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request with `query` appended to `url`.
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, RestError>;

    /// Send a POST request with `body` serialized as JSON.
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpResponse, RestError>;
}
