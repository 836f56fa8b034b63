//! Telegram Bot API DTOs
//!
//! Only the pieces of `sendMessage` the bot uses.

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    /// Target chat identifier (numeric id or `@channel` name)
    pub chat_id: String,

    /// Plain message text
    pub text: String,
}

/// Envelope every Bot API method replies with
///
/// `result` is left untyped since the bot only cares whether the call
/// succeeded.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramReply {
    pub ok: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub result: Option<serde_json::Value>,
}
