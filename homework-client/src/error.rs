//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the Practicum or Telegram APIs
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got an HTTP response (DNS, refused connection, timeout)
    #[error("Ошибка при запросе к API: {0}")]
    Connectivity(#[from] reqwest::Error),

    /// API answered with a status code other than the expected one
    #[error("API вернул статус код {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Telegram accepted the request but refused to perform it
    #[error("Telegram rejected the request: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an HTTP status error from status code and body
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }
}
