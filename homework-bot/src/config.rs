//! Bot configuration
//!
//! Defines the secrets and tunables of the bot. Values come from the command
//! line or the environment (see `main.rs`) and are checked once, before the
//! polling loop starts.

use homework_client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Pause between two polls
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Fatal configuration problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required secrets are absent or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    /// A tunable has a value the bot cannot work with
    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat receiving the notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// How long to sleep between two polls
    pub retry_period: Duration,

    /// Timeout applied to every outbound request
    pub request_timeout: Duration,

    /// File receiving the debug log, truncated on start
    pub log_file: PathBuf,
}

impl Config {
    /// Creates a new configuration with defaults for everything but the secrets
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_period: DEFAULT_RETRY_PERIOD,
            request_timeout: DEFAULT_TIMEOUT,
            log_file: PathBuf::from("main.log"),
        }
    }

    /// Names of required secrets that are absent or empty
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_variables();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                name: "endpoint",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "retry_period",
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "request_timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
