//! Homework HTTP Clients
//!
//! Typed clients for the two remote services the bot talks to:
//! - the Practicum homework statuses API (`PracticumClient`)
//! - the Telegram Bot API (`TelegramClient`)
//!
//! Every client is built with an explicit request timeout, and a request that
//! exceeds it fails with [`ClientError::Timeout`] rather than blocking forever.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new("practicum-token", Duration::from_secs(30))?;
//!
//!     let body = client.homework_statuses(0).await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{TELEGRAM_API_BASE, TelegramClient};

use reqwest::Client;
use std::time::Duration;

/// Homework statuses endpoint of the Practicum API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Practicum homework statuses API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token of the student
    token: String,
    /// Timeout the HTTP client was built with, reported in timeout errors
    timeout: Duration,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a client for the default endpoint
    ///
    /// # Arguments
    /// * `token` - The student's Practicum OAuth token
    /// * `timeout` - Upper bound for a whole request, including the body
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token, timeout)
    }

    /// Create a client for a custom endpoint
    ///
    /// # Example
    /// ```
    /// use homework_client::PracticumClient;
    /// use std::time::Duration;
    ///
    /// let client = PracticumClient::with_endpoint(
    ///     "http://localhost:8080/statuses/",
    ///     "token",
    ///     Duration::from_secs(5),
    /// )
    /// .unwrap();
    /// assert_eq!(client.endpoint(), "http://localhost:8080/statuses/");
    /// ```
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Setup)?;

        Ok(Self {
            endpoint: endpoint.into(),
            token: token.into(),
            timeout,
            client,
        })
    }

    /// Get the statuses endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value of the `Authorization` header
    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }

    /// Headers as they appear in error messages, token redacted
    fn redacted_headers(&self) -> String {
        "{Authorization: OAuth ***}".to_string()
    }

    // =============================================================================
    // Error Mapping
    // =============================================================================

    /// Map a transport-level failure to a typed error
    fn transport_error(&self, err: reqwest::Error, params: String) -> ClientError {
        if err.is_timeout() {
            return ClientError::Timeout {
                endpoint: self.endpoint.clone(),
                timeout: self.timeout,
            };
        }

        ClientError::Connection {
            endpoint: self.endpoint.clone(),
            headers: self.redacted_headers(),
            params,
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("token", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_authorization_uses_oauth_scheme() {
        let client = PracticumClient::new("abc", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.authorization(), "OAuth abc");
    }

    #[test]
    fn test_headers_never_leak_token() {
        let client = PracticumClient::new("very-secret", DEFAULT_TIMEOUT).unwrap();
        assert!(!client.redacted_headers().contains("very-secret"));
    }
}
