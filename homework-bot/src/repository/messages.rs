//! Message repository
//!
//! Delivers text messages to a chat.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Repository trait for outbound messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to `chat_id`
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl MessageRepository for TelegramClient {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        self.send_message(chat_id, text).await
    }
}
