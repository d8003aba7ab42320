//! Signed client for the age verification API.
//!
//! This crate provides:
//!
//! - **Request signing**: every call carries `apiId` and a `signature`
//!   computed with the deployment's [`SignatureScheme`]
//! - **Four operations**: need-verification, check-age-verification,
//!   check-age-verification-result and update-verification-result
//! - **Error handling**: configuration, transport, HTTP status and decode
//!   failures are reported through [`AgeVerifierError`]
//!
//! Responses are returned as untyped JSON; [`VerificationStatus`] helps
//! callers read the `result.status` code.
//!
//! # Example
//!
//! ```rust,ignore
//! use age_verifier::{AgeVerifierClient, ClientConfig, VerificationStatus};
//!
//! let config = ClientConfig::new("https://verify.example.com/", "my_app", "shared_key")?;
//! let client = AgeVerifierClient::new(config)?;
//!
//! let response = client.need_verification("203.0.113.7", "user-42").await?;
//! if VerificationStatus::from_response(&response) == Some(VerificationStatus::Needed) {
//!     let session = client
//!         .start_check_age_verification("session-1", "203.0.113.7", Some("user-42"))
//!         .await?;
//! }
//! ```

mod client;
mod config;
mod error;
mod status;

pub use auth::{ApiCredentials, SignatureScheme};
pub use client::{transport_method, AgeVerifierClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::AgeVerifierError;
pub use rest_client::{HttpMethod, HttpResponse, HttpTransport, RestClient, RestError};
pub use status::VerificationStatus;
