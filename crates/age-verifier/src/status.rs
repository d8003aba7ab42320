//! Verification status codes reported by the API.

use serde_json::Value;
use std::fmt;

/// Status found at `result.status` in API responses.
///
/// Client operations return responses verbatim; this is a helper for
/// callers that want to branch on the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// No verification required for this user.
    NotNeeded,
    /// Verification required.
    Needed,
    /// Verification passed.
    Success,
    /// Verification failed.
    Fail,
    /// Verification started but not finished.
    InProgress,
    /// The service could not complete the verification.
    Error,
}

impl VerificationStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::NotNeeded),
            1 => Some(Self::Needed),
            2 => Some(Self::Success),
            3 => Some(Self::Fail),
            4 => Some(Self::InProgress),
            5 => Some(Self::Error),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::NotNeeded => 0,
            Self::Needed => 1,
            Self::Success => 2,
            Self::Fail => 3,
            Self::InProgress => 4,
            Self::Error => 5,
        }
    }

    /// Read `result.status` from a response body.
    ///
    /// Returns `None` when the field is missing, not an integer, or an
    /// unknown code.
    pub fn from_response(response: &Value) -> Option<Self> {
        response
            .get("result")
            .and_then(|r| r.get("status"))
            .and_then(Value::as_i64)
            .and_then(Self::from_code)
    }

    /// True once the verification has a final outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotNeeded | Self::Success | Self::Fail | Self::Error)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotNeeded => "not_needed",
            Self::Needed => "needed",
            Self::Success => "success",
            Self::Fail => "fail",
            Self::InProgress => "in_progress",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes() {
        for code in 0..=5 {
            let status = VerificationStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(VerificationStatus::from_code(6), None);
        assert_eq!(VerificationStatus::from_code(-1), None);
    }

    #[test]
    fn test_from_response() {
        let body = json!({"result": {"status": 1}});
        assert_eq!(
            VerificationStatus::from_response(&body),
            Some(VerificationStatus::Needed)
        );
    }

    #[test]
    fn test_from_response_missing_or_malformed() {
        assert_eq!(VerificationStatus::from_response(&json!({})), None);
        assert_eq!(
            VerificationStatus::from_response(&json!({"result": {"status": "1"}})),
            None
        );
        assert_eq!(
            VerificationStatus::from_response(&json!({"result": {"status": 42}})),
            None
        );
    }

    #[test]
    fn test_terminal() {
        assert!(VerificationStatus::Success.is_terminal());
        assert!(!VerificationStatus::Needed.is_terminal());
        assert!(!VerificationStatus::InProgress.is_terminal());
    }
}
