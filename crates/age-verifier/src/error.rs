//! Age verification client error types.

use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when calling the age verification API.
#[derive(Debug, Error)]
pub enum AgeVerifierError {
    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or timeout.
    #[error("Transport error: {0}")]
    Transport(#[from] RestError),

    /// The API answered with a non-2xx status.
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl AgeVerifierError {
    /// HTTP status for [`AgeVerifierError::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http() {
        let http = AgeVerifierError::Http {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(http.status(), Some(503));
        assert_eq!(AgeVerifierError::Decode("x".into()).status(), None);
    }

    #[test]
    fn test_transport_from_rest_error() {
        let err: AgeVerifierError = RestError::Timeout.into();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Transport error: Request timeout");
    }
}
