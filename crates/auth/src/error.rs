use thiserror::Error;

/// Errors that can occur while configuring request signing.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The signature scheme name is not recognized.
    #[error("unknown signature scheme '{0}', expected 'hmac-sha256' or 'keyed-sha1'")]
    UnknownScheme(String),
}
