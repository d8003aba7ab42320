//! Credentials and request signing for the age verification API.
//!
//! # Features
//!
//! - **Secure Credentials**: the shared key is wrapped in `SecretString` to
//!   prevent accidental logging and is zeroed on drop.
//! - **Sorted Parameters**: `RequestParams` keeps keys ordered, so signatures
//!   never depend on insertion order.
//! - **Two Signature Schemes**: HMAC-SHA256 with nonce, and keyed SHA-1.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestParams, RequestSigner, SignatureScheme};
//!
//! let credentials = ApiCredentials::new("my_app", "shared_key");
//! let signer = RequestSigner::new(&credentials, SignatureScheme::HmacSha256);
//!
//! let mut params = RequestParams::new();
//! params.insert("sessionId", "abc");
//! let signed = signer.sign(params, timestamp_secs);
//! ```

mod credentials;
mod error;
mod params;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use params::{RequestParams, SignedRequest, API_ID_FIELD, NONCE_FIELD, SIGNATURE_FIELD};
pub use signer::{RequestSigner, SignatureScheme};
