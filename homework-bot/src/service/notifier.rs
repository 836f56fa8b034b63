//! Notification delivery
//!
//! Best-effort: a failed send is logged and dropped so it can never disturb
//! the polling loop.

use std::sync::Arc;

use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Sends messages to the configured chat
#[derive(Clone)]
pub struct Notifier {
    messages: Arc<dyn MessageRepository>,
    chat_id: String,
}

impl Notifier {
    /// Creates a notifier bound to one chat
    pub fn new(messages: Arc<dyn MessageRepository>, chat_id: impl Into<String>) -> Self {
        Self {
            messages,
            chat_id: chat_id.into(),
        }
    }

    /// Delivers `message`, swallowing any failure
    pub async fn notify(&self, message: &str) {
        match self.messages.send(&self.chat_id, message).await {
            Ok(()) => debug!("Сообщение успешно отправлено в Telegram"),
            Err(e) => error!("Ошибка при отправке сообщения в Telegram: {}", e),
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}
