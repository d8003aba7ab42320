//! Client settings loaded from environment variables.
//!
//! Looks for:
//! - `AGE_VERIFIER_API_URL` - Base URL of the API
//! - `AGE_VERIFIER_API_ID` - Application identifier (public)
//! - `AGE_VERIFIER_API_KEY` - Shared signing key (private)
//! - `AGE_VERIFIER_SCHEME` - Optional, `hmac-sha256` (default) or `keyed-sha1`
//! - `AGE_VERIFIER_TIMEOUT_MS` - Optional request timeout in milliseconds

use auth::{AuthError, SignatureScheme};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "AGE_VERIFIER_API_URL";
pub const API_ID_VAR: &str = "AGE_VERIFIER_API_ID";
pub const API_KEY_VAR: &str = "AGE_VERIFIER_API_KEY";
pub const SCHEME_VAR: &str = "AGE_VERIFIER_SCHEME";
pub const TIMEOUT_MS_VAR: &str = "AGE_VERIFIER_TIMEOUT_MS";

/// Errors loading settings from the environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The signature scheme is not recognized.
    #[error(transparent)]
    Scheme(#[from] AuthError),

    /// The timeout is not a whole number of milliseconds.
    #[error("Invalid AGE_VERIFIER_TIMEOUT_MS '{0}'")]
    InvalidTimeout(String),
}

/// Raw client settings read from the environment.
#[derive(Clone)]
pub struct VerifierEnv {
    pub api_url: String,
    pub api_id: String,
    pub api_key: String,
    pub scheme: SignatureScheme,
    pub timeout: Option<Duration>,
}

impl VerifierEnv {
    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, EnvError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(EnvError::MissingEnvVar(name));

        let scheme = match lookup(SCHEME_VAR) {
            Some(s) => s.parse()?,
            None => SignatureScheme::default(),
        };

        let timeout = lookup(TIMEOUT_MS_VAR)
            .map(|ms| {
                ms.trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| EnvError::InvalidTimeout(ms))
            })
            .transpose()?;

        Ok(Self {
            api_url: required(API_URL_VAR)?,
            api_id: required(API_ID_VAR)?,
            api_key: required(API_KEY_VAR)?,
            scheme,
            timeout,
        })
    }
}

impl fmt::Debug for VerifierEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierEnv")
            .field("api_url", &self.api_url)
            .field("api_id", &self.api_id)
            .field("api_key", &"[REDACTED]")
            .field("scheme", &self.scheme)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        (API_URL_VAR, "https://fake-api.com"),
        (API_ID_VAR, "app"),
        (API_KEY_VAR, "secret"),
    ];

    #[test]
    fn test_required_only() {
        let env = VerifierEnv::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(env.api_url, "https://fake-api.com");
        assert_eq!(env.api_id, "app");
        assert_eq!(env.scheme, SignatureScheme::HmacSha256);
        assert_eq!(env.timeout, None);
    }

    #[test]
    fn test_optional_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push((SCHEME_VAR, "keyed-sha1"));
        vars.push((TIMEOUT_MS_VAR, "1500"));

        let env = VerifierEnv::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(env.scheme, SignatureScheme::KeyedSha1);
        assert_eq!(env.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_missing_key() {
        let err = VerifierEnv::from_lookup(lookup(&REQUIRED[..2])).unwrap_err();
        assert!(matches!(err, EnvError::MissingEnvVar(API_KEY_VAR)));
    }

    #[test]
    fn test_invalid_scheme_and_timeout() {
        let mut vars = REQUIRED.to_vec();
        vars.push((SCHEME_VAR, "md5"));
        assert!(matches!(
            VerifierEnv::from_lookup(lookup(&vars)).unwrap_err(),
            EnvError::Scheme(_)
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push((TIMEOUT_MS_VAR, "soon"));
        assert!(matches!(
            VerifierEnv::from_lookup(lookup(&vars)).unwrap_err(),
            EnvError::InvalidTimeout(_)
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let env = VerifierEnv::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(!format!("{:?}", env).contains("secret"));
    }
}
