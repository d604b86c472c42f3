//! Messages repository
//!
//! Delivers notification texts to the student's chat.

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Repository trait for outbound notifications
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends one text message
    ///
    /// Makes a single attempt; a failure is returned to the caller, which
    /// decides whether the message should be tried again later.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.client.send_message(text).await
    }
}
