//! Status poller
//!
//! Polls the status API on a fixed period and relays the verdict of the
//! most recent homework to the chat. A failed cycle is logged and the next
//! one starts after the usual wait.

use std::sync::Arc;

use homework_core::domain::cursor::PollCursor;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};

use crate::error::PollError;
use crate::repository::StatusRepository;
use crate::service::{Notifier, ResponseValidator, StatusParser};

/// Poller that continuously checks homework statuses
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    validator: ResponseValidator,
    parser: StatusParser,
    notifier: Notifier,
    /// Lower bound of every status query. Never advanced: each cycle asks
    /// for the same window, so an unchanged latest homework is re-announced.
    cursor: PollCursor,
    retry_period: Duration,
}

impl StatusPoller {
    /// Creates a new poller starting from [`PollCursor::INITIAL`]
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        parser: StatusParser,
        notifier: Notifier,
        retry_period: Duration,
    ) -> Self {
        Self {
            statuses,
            validator: ResponseValidator::new(),
            parser,
            notifier,
            cursor: PollCursor::INITIAL,
            retry_period,
        }
    }

    /// Cursor the next cycle will query from
    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Never returns; the first cycle runs immediately.
    pub async fn run(&self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.retry_period, self.cursor
        );

        loop {
            self.run_cycle().await;

            debug!("Ожидание перед следующей попыткой...");
            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single cycle, logging its failure if there is one
    pub async fn run_cycle(&self) {
        if let Err(e) = self.poll_once().await {
            report_failure(&e);
        }
    }

    /// Fetches, validates, parses and notifies once
    ///
    /// Returns the message that was handed to the notifier. Delivery itself
    /// is best-effort and does not affect the result.
    pub async fn poll_once(&self) -> Result<String, PollError> {
        debug!("Polling homework statuses from {}", self.cursor);

        let payload = self.statuses.fetch(self.cursor).await?;
        let response = self.validator.validate(payload)?;
        let homework = self.validator.latest_record(&response)?;
        let message = self.parser.parse(&homework)?;

        self.notifier.notify(&message).await;

        Ok(message)
    }
}

/// Logs one line per failed cycle, tagged with the stage that failed
fn report_failure(err: &PollError) {
    let stage = match err {
        PollError::Connectivity(_) | PollError::HttpStatus(_) => "fetch",
        PollError::MissingField("homework_name" | "status") => "parse",
        PollError::Shape(_) | PollError::MissingField(_) => "validate",
        PollError::EmptyQueue => "select",
        PollError::UnknownStatus(_) | PollError::MissingVerdict(_) => "parse",
    };

    error!(
        stage = stage,
        kind = err.kind(),
        "Сбой в работе программы: {}",
        err
    );
}
