//! Shared fakes for the repository traits.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use homework_client::ClientError;
use homework_core::domain::cursor::PollCursor;
use serde_json::Value as JsonValue;

use crate::repository::{MessageRepository, StatusRepository};

/// Replays queued responses, then repeats `fallback` forever.
/// Every cursor it was asked for is recorded.
pub(crate) struct ScriptedStatuses {
    queued: Mutex<VecDeque<Result<JsonValue, ClientError>>>,
    fallback: JsonValue,
    cursors: Mutex<Vec<PollCursor>>,
}

impl ScriptedStatuses {
    /// Always answers with `payload`
    pub(crate) fn always(payload: JsonValue) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: payload,
            cursors: Mutex::new(Vec::new()),
        }
    }

    /// Answers with `first` once, then with `fallback`
    pub(crate) fn then(first: Result<JsonValue, ClientError>, fallback: JsonValue) -> Self {
        let statuses = Self::always(fallback);
        statuses.queued.lock().unwrap().push_back(first);
        statuses
    }

    pub(crate) fn cursors(&self) -> Vec<PollCursor> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusRepository for ScriptedStatuses {
    async fn fetch(&self, cursor: PollCursor) -> Result<JsonValue, ClientError> {
        self.cursors.lock().unwrap().push(cursor);
        match self.queued.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(self.fallback.clone()),
        }
    }
}

/// Records every send; fails each one when built with [`RecordingMessages::failing`]
#[derive(Default)]
pub(crate) struct RecordingMessages {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingMessages {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for RecordingMessages {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        if self.fail {
            return Err(ClientError::Rejected(
                "Forbidden: bot was blocked by the user".to_string(),
            ));
        }
        Ok(())
    }
}
