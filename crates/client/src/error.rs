//! Errors at the HTTP boundary.

use thiserror::Error;

/// Failure of one backend call.
///
/// Nothing here is fatal: every failure is per-action and recoverable by
/// repeating the user gesture. No call is retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401/403: the session is invalid, whatever the cause; the caller
    /// tears the session down and sends the user back to login.
    #[error("session expired or invalid")]
    SessionExpired,

    /// The backend refused the request; the message is shown verbatim.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transport-level failure; the prior in-memory state stays untouched.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}
