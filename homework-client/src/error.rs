//! Error types for the homework clients

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or to Telegram
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response (DNS, refused connection, reset, TLS)
    #[error("Connection to {endpoint} failed (headers: {headers}, params: {params}): {source}")]
    Connection {
        endpoint: String,
        /// Request headers with secrets redacted
        headers: String,
        params: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout
    #[error("Request to {endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },

    /// API answered with something other than 200 OK
    #[error("API returned unexpected status {status} {reason}: {body}")]
    WrongApiResponseCode {
        status: u16,
        reason: String,
        body: String,
    },

    /// Response body is not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Telegram did not accept the message
    #[error("Failed to deliver Telegram message: {0}")]
    TelegramDelivery(String),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),
}

impl ClientError {
    /// Create an unexpected-status error from an HTTP status and body
    pub fn wrong_status(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::WrongApiResponseCode {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: body.into(),
        }
    }

    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_status_carries_reason_phrase() {
        let err = ClientError::wrong_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            err.to_string(),
            "API returned unexpected status 500 Internal Server Error: boom"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_unknown_status_has_placeholder_reason() {
        let status = reqwest::StatusCode::from_u16(599).unwrap();
        let err = ClientError::wrong_status(status, "");
        assert!(matches!(
            err,
            ClientError::WrongApiResponseCode { status: 599, ref reason, .. } if reason == "Unknown"
        ));
    }

    #[test]
    fn test_timeout_classification() {
        let err = ClientError::Timeout {
            endpoint: "http://localhost".to_string(),
            timeout: Duration::from_secs(1),
        };
        assert!(err.is_timeout());
    }
}
