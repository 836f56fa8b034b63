//! Status repository
//!
//! Fetches raw homework status payloads for a cursor.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use homework_core::domain::cursor::PollCursor;
use serde_json::Value as JsonValue;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches the statuses changed since `cursor`
    ///
    /// The payload is returned undecoded; shape checks happen in the
    /// response validator.
    async fn fetch(&self, cursor: PollCursor) -> Result<JsonValue, ClientError>;
}

#[async_trait]
impl StatusRepository for PracticumClient {
    async fn fetch(&self, cursor: PollCursor) -> Result<JsonValue, ClientError> {
        self.fetch_statuses(cursor.timestamp()).await
    }
}
