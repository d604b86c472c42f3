//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot talks, it never listens.

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Base URL of the Telegram Bot API
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client sending text messages to one chat
#[derive(Debug, Clone)]
pub struct TelegramClient {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope of every Bot API reply
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a client for the public Bot API
    ///
    /// # Arguments
    /// * `token` - Bot token issued by BotFather
    /// * `chat_id` - Destination chat identifier
    /// * `timeout` - Upper bound for a whole request
    pub fn new(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Self::with_api_base(TELEGRAM_API_BASE, token, chat_id, timeout)
    }

    /// Create a client for a custom Bot API server
    pub fn with_api_base(
        api_base: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Setup)?;

        let api_base = api_base.into();
        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        })
    }

    /// Send a text message to the configured chat
    ///
    /// Makes exactly one attempt. Any failure, whether transport, HTTP status
    /// or `ok: false`, is returned as [`ClientError::TelegramDelivery`].
    pub async fn send_message(&self, text: &str) -> Result<()> {
        match self.post_message(text).await {
            Ok(()) => {
                debug!("Bot sent message: {}", text);
                Ok(())
            }
            Err(e) => {
                error!("Failed to send message to chat {}: {}", self.chat_id, e);
                Err(e)
            }
        }
    }

    async fn post_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);

        // The URL embeds the bot token, keep it out of error messages
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| ClientError::TelegramDelivery(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::TelegramDelivery(e.without_url().to_string()))?;

        let reply: Option<ApiReply> = serde_json::from_str(&body).ok();
        match reply {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(ClientError::TelegramDelivery(format!(
                "status {}: {}",
                status.as_u16(),
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string())
            ))),
            None => Err(ClientError::TelegramDelivery(format!(
                "status {}: unexpected reply {}",
                status.as_u16(),
                body
            ))),
        }
    }
}
