//! API credentials for signed requests.
//!
//! Uses the `secrecy` crate so the shared key never shows up in logs and is
//! zeroed on drop.

use secrecy::{ExposeSecret, SecretString};

/// Credentials issued by the age verification service.
///
/// The `api_id` travels in cleartext with every request. The `api_key` is
/// only ever used as signing key material.
pub struct ApiCredentials {
    api_id: String,
    api_key: SecretString,
}

impl ApiCredentials {
    /// Create credentials from explicit values.
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Public application identifier (safe to log).
    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    /// Expose the shared key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl Clone for ApiCredentials {
    fn clone(&self) -> Self {
        Self::new(self.api_id.clone(), self.expose_secret().to_owned())
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_id", &self.api_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
