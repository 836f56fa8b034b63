//! Telegram Bot API messaging

use homework_core::dto::telegram::{SendMessage, TelegramReply};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::redact;

/// Production base URL of the Bot API
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
///
/// The bot token is part of every request URL, so transport errors are
/// stripped of their URL before they leave this type.
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a client for the production Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a client with a custom base URL and HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a plain text message to a chat
    ///
    /// # Errors
    /// - [`ClientError::Connectivity`] on transport failure
    /// - [`ClientError::HttpStatus`] on a non-2xx reply
    /// - [`ClientError::ParseError`] if the reply is not a Bot API envelope
    /// - [`ClientError::Rejected`] if the envelope has `ok: false`
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let request = SendMessage {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Connectivity(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::http_status(status.as_u16(), body));
        }

        let reply: TelegramReply = response.json().await.map_err(|e| {
            ClientError::ParseError(format!(
                "Failed to parse Bot API reply: {}",
                e.without_url()
            ))
        })?;

        if !reply.ok {
            return Err(ClientError::Rejected(
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        debug!("Message delivered to chat {}", chat_id);
        Ok(())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &redact(&self.token))
            .finish()
    }
}
