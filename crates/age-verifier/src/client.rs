//! Age verification API client.

use crate::config::ClientConfig;
use crate::error::AgeVerifierError;
use auth::{RequestParams, RequestSigner, SignatureScheme, SignedRequest};
use rest_client::{HttpMethod, HttpResponse, HttpTransport, RestClient};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

const NEED_VERIFICATION: &str = "api/need-verification";
const CHECK_AGE_VERIFICATION: &str = "api/check-age-verification";
const CHECK_AGE_VERIFICATION_RESULT: &str = "api/check-age-verification-result";
const UPDATE_VERIFICATION_RESULT: &str = "api/update-verification-result";

/// HTTP method used by deployments of each signature scheme.
///
/// HMAC deployments take a JSON body; keyed SHA-1 deployments take the
/// query string.
pub fn transport_method(scheme: SignatureScheme) -> HttpMethod {
    match scheme {
        SignatureScheme::HmacSha256 => HttpMethod::Post,
        SignatureScheme::KeyedSha1 => HttpMethod::Get,
    }
}

/// Signed client for the age verification API.
///
/// Each operation is a single, independent request. The client holds only
/// read-only configuration and can be shared between tasks.
pub struct AgeVerifierClient<T = RestClient> {
    config: ClientConfig,
    transport: T,
}

impl AgeVerifierClient<RestClient> {
    /// Create a client backed by a default `RestClient`.
    ///
    /// # Errors
    /// Returns `AgeVerifierError::Config` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, AgeVerifierError> {
        let transport =
            RestClient::new().map_err(|e| AgeVerifierError::Config(e.to_string()))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> AgeVerifierClient<T> {
    /// Create a client with an explicit transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check whether `user_id` must pass age verification.
    ///
    /// Endpoint: `api/need-verification`
    pub async fn need_verification(
        &self,
        client_ip: &str,
        user_id: &str,
    ) -> Result<Value, AgeVerifierError> {
        let mut params = RequestParams::new();
        params.insert("clientIp", client_ip).insert("userId", user_id);

        self.signed_request(NEED_VERIFICATION, params).await
    }

    /// Start an age verification session.
    ///
    /// `user_id` is omitted from the request when `None` or empty.
    ///
    /// Endpoint: `api/check-age-verification`
    pub async fn start_check_age_verification(
        &self,
        session_id: &str,
        client_ip: &str,
        user_id: Option<&str>,
    ) -> Result<Value, AgeVerifierError> {
        let mut params = RequestParams::new();
        params
            .insert("sessionId", session_id)
            .insert("clientIp", client_ip)
            .insert_opt("userId", user_id);

        self.signed_request(CHECK_AGE_VERIFICATION, params).await
    }

    /// Fetch the outcome of a verification session.
    ///
    /// Endpoint: `api/check-age-verification-result`
    pub async fn check_age_verification_result(
        &self,
        session_id: &str,
    ) -> Result<Value, AgeVerifierError> {
        let mut params = RequestParams::new();
        params.insert("sessionId", session_id);

        self.signed_request(CHECK_AGE_VERIFICATION_RESULT, params).await
    }

    /// Bind `user_id` to a verification session, e.g. after registration.
    ///
    /// Endpoint: `api/update-verification-result`
    pub async fn update_verification_result(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<Value, AgeVerifierError> {
        let mut params = RequestParams::new();
        params
            .insert("sessionId", session_id)
            .insert("userId", user_id);

        self.signed_request(UPDATE_VERIFICATION_RESULT, params).await
    }

    fn sign(&self, params: RequestParams) -> SignedRequest {
        let timestamp_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        RequestSigner::new(self.config.credentials(), self.config.scheme())
            .sign(params, timestamp_secs)
    }

    /// Sign `params`, send them to `endpoint` and decode the JSON response.
    async fn signed_request(
        &self,
        endpoint: &str,
        params: RequestParams,
    ) -> Result<Value, AgeVerifierError> {
        let signed = self.sign(params);
        let url = self.config.endpoint_url(endpoint);
        let method = transport_method(self.config.scheme());
        let timeout = self.config.timeout();

        tracing::debug!(
            endpoint = %endpoint,
            method = %method,
            params = ?signed.params().keys().collect::<Vec<_>>(),
            "Sending signed request"
        );

        let response = match method {
            HttpMethod::Get => {
                self.transport
                    .get(&url, &signed.to_query_pairs(), timeout)
                    .await?
            }
            HttpMethod::Post => {
                self.transport
                    .post_json(&url, &signed.to_json(), timeout)
                    .await?
            }
        };

        Self::handle_response(endpoint, response)
    }

    /// Map a non-2xx status to an error and decode the JSON body.
    fn handle_response(endpoint: &str, response: HttpResponse) -> Result<Value, AgeVerifierError> {
        if !response.is_success() {
            let body = response.text();
            tracing::warn!(
                endpoint = %endpoint,
                status = response.status,
                body = %body,
                "Request failed"
            );
            return Err(AgeVerifierError::Http {
                status: response.status,
                body,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!(endpoint = %endpoint, error = %e, "Failed to parse response");
            AgeVerifierError::Decode(e.to_string())
        })
    }
}
