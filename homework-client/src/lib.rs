//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two services the homework bot talks to:
//! - [`PracticumClient`]: the Practicum `homework_statuses` endpoint
//! - [`TelegramClient`]: the Telegram Bot API `sendMessage` method
//!
//! Both clients normalize transport and HTTP failures into [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let practicum = PracticumClient::new("practicum-token");
//!     let payload = practicum.fetch_statuses(1690008665).await?;
//!
//!     let telegram = TelegramClient::new("bot-token");
//!     telegram.send_message("123456", &payload.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{PRACTICUM_ENDPOINT, PracticumClient};
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

/// Redacts a secret for `Debug` output, keeping only its length visible
pub(crate) fn redact(secret: &str) -> String {
    format!("<redacted:{}>", secret.len())
}
