//! `reqwest`-backed HTTP transport.

use crate::error::RestError;
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// REST client making one request per call.
///
/// Timeouts are applied per request, so a single client can serve callers
/// with different deadlines.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// Create a new REST client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, RestError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Read status and body bytes from a response.
    async fn read_response(response: Response) -> Result<HttpResponse, RestError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!(status = status, body_len = body.len(), "Response received");

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for RestClient {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, RestError> {
        tracing::debug!(url = %url, params = query.len(), "GET request");

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpResponse, RestError> {
        tracing::debug!(url = %url, "POST request");

        let response = self
            .client
            .post(url)
            .json(body)
            .timeout(timeout)
            .send()
            .await?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_get_sends_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/ping")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("a".into(), "1".into()),
                Matcher::UrlEncoded("b".into(), "x y".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = RestClient::new().unwrap();
        let query = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "x y".to_string()),
        ];
        let response = client
            .get(&format!("{}/api/ping", server.url()), &query, TIMEOUT)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.text(), r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/echo")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"k": "v"})))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = RestClient::new().unwrap();
        let response = client
            .post_json(
                &format!("{}/api/echo", server.url()),
                &serde_json::json!({"k": "v"}),
                TIMEOUT,
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 201);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/fail")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = RestClient::new().unwrap();
        let response = client
            .get(&format!("{}/api/fail", server.url()), &[], TIMEOUT)
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.text(), "boom");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = RestClient::new().unwrap();
        let err = client
            .get("http://127.0.0.1:1/api/ping", &[], TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RestError::Connection(_) | RestError::Timeout
        ));
    }
}
