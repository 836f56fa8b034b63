//! Poll cycle errors

use homework_client::ClientError;
use thiserror::Error;

/// Everything that can abort a single poll cycle
///
/// None of these are fatal: the poller logs them and waits for the next
/// cycle. Delivery failures are not listed here because the notifier never
/// lets them out.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    /// No HTTP response from the status API
    #[error("{0}")]
    Connectivity(String),

    /// Status API answered with something other than 200
    #[error("API вернул статус код {0}")]
    HttpStatus(u16),

    /// Payload does not have the expected structure
    #[error("{0}")]
    Shape(String),

    /// A required key is absent from the response or a homework record
    #[error("Отсутствует ключ '{key}' в {loc}", key = .0, loc = field_location(.0))]
    MissingField(&'static str),

    /// Homework status is not in the verdict catalog
    #[error("Неожиданный статус домашней работы: {0}")]
    UnknownStatus(String),

    /// Status is known but has no verdict text
    #[error("Нет информации о вердикте для статуса {0}")]
    MissingVerdict(String),

    /// Response contained no homework entries
    #[error("Список домашних работ пуст")]
    EmptyQueue,
}

impl PollError {
    /// Short machine-readable label used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Connectivity(_) => "connectivity",
            PollError::HttpStatus(_) => "http_status",
            PollError::Shape(_) => "shape",
            PollError::MissingField(_) => "missing_field",
            PollError::UnknownStatus(_) => "unknown_status",
            PollError::MissingVerdict(_) => "missing_verdict",
            PollError::EmptyQueue => "empty_queue",
        }
    }
}

/// Where a required key lives, for the missing-key message
fn field_location(key: &str) -> &'static str {
    match key {
        "homework_name" | "status" => "данных о домашней работе",
        _ => "ответе API",
    }
}

impl From<ClientError> for PollError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Connectivity(_) => PollError::Connectivity(err.to_string()),
            ClientError::HttpStatus { status, .. } => PollError::HttpStatus(status),
            ClientError::ParseError(msg) => PollError::Shape(msg),
            ClientError::Rejected(msg) => PollError::Shape(format!("API отклонил запрос: {}", msg)),
        }
    }
}
