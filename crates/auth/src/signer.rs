//! Request signing for the age verification API.
//!
//! Two signature schemes exist in deployed versions of the API. They differ
//! in digest, canonicalization and injected fields, and are never mixed:
//!
//! - [`SignatureScheme::HmacSha256`]: sorted `key||value` pairs, HMAC-SHA256
//!   keyed with the shared key, with `apiId` and `nonce` injected.
//! - [`SignatureScheme::KeyedSha1`]: sorted values, lowercased, shared key
//!   appended, SHA-1, with only `apiId` injected.

use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use crate::params::{RequestParams, SignedRequest, API_ID_FIELD, NONCE_FIELD, SIGNATURE_FIELD};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm used by a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// HMAC-SHA256 over `key||value` pairs, with a timestamp nonce.
    #[default]
    HmacSha256,
    /// SHA-1 over lowercased values with the shared key appended.
    KeyedSha1,
}

impl SignatureScheme {
    /// Whether a `nonce` field is injected before signing.
    pub fn uses_nonce(&self) -> bool {
        matches!(self, Self::HmacSha256)
    }

    /// Length of the hex-encoded signature.
    pub fn signature_len(&self) -> usize {
        match self {
            Self::HmacSha256 => 64,
            Self::KeyedSha1 => 40,
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HmacSha256 => write!(f, "hmac-sha256"),
            Self::KeyedSha1 => write!(f, "keyed-sha1"),
        }
    }
}

impl FromStr for SignatureScheme {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hmac-sha256" | "hmac" | "a" => Ok(Self::HmacSha256),
            "keyed-sha1" | "sha1" | "b" => Ok(Self::KeyedSha1),
            _ => Err(AuthError::UnknownScheme(s.to_string())),
        }
    }
}

/// Request signer for authenticated age verification API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
    scheme: SignatureScheme,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a ApiCredentials, scheme: SignatureScheme) -> Self {
        Self {
            credentials,
            scheme,
        }
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Compute the lowercase hex signature of `params`.
    ///
    /// A `signature` entry, if present, is never part of the input.
    pub fn signature(&self, params: &RequestParams) -> String {
        let fields = params.iter().filter(|(k, _)| *k != SIGNATURE_FIELD);

        match self.scheme {
            SignatureScheme::HmacSha256 => {
                let message: String = fields.map(|(k, v)| format!("{}{}", k, v)).collect();

                let mut mac =
                    HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
                        .expect("HMAC can take key of any size");
                mac.update(message.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
            SignatureScheme::KeyedSha1 => {
                let mut message: String = fields.map(|(_, v)| v).collect::<String>().to_lowercase();
                // The key is appended as-is, after lowercasing.
                message.push_str(self.credentials.expose_secret());

                hex::encode(Sha1::digest(message.as_bytes()))
            }
        }
    }

    /// Inject the shared fields, sign, and append the signature.
    ///
    /// # Arguments
    /// * `params` - Operation-specific parameters
    /// * `timestamp_secs` - Current unix time, used as the nonce by the HMAC scheme
    pub fn sign(&self, mut params: RequestParams, timestamp_secs: u64) -> SignedRequest {
        params.insert(API_ID_FIELD, self.credentials.api_id());
        if self.scheme.uses_nonce() {
            params.insert(NONCE_FIELD, timestamp_secs);
        }

        let signature = self.signature(&params);
        SignedRequest::new(params, signature)
    }
}
