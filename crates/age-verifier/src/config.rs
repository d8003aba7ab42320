//! Client configuration.

use crate::error::AgeVerifierError;
use auth::{ApiCredentials, SignatureScheme};
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Immutable configuration of an [`AgeVerifierClient`](crate::AgeVerifierClient).
///
/// Supplied by the embedding application; nothing here is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: ApiCredentials,
    timeout: Duration,
    scheme: SignatureScheme,
}

impl ClientConfig {
    /// Create a configuration with the default timeout and scheme.
    ///
    /// Trailing slashes are stripped from `base_url`.
    ///
    /// # Errors
    /// Returns `AgeVerifierError::Config` if `base_url` is empty.
    pub fn new(
        base_url: &str,
        api_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, AgeVerifierError> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AgeVerifierError::Config("base_url is required".into()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            credentials: ApiCredentials::new(api_id, api_key),
            timeout: DEFAULT_TIMEOUT,
            scheme: SignatureScheme::default(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_id(&self) -> &str {
        self.credentials.api_id()
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Full URL of an API endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}
