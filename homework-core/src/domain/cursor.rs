//! Polling cursor

use chrono::{DateTime, Utc};

/// Lower bound (seconds since epoch) for the next status query
///
/// Sent to the API as the `from_date` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    /// Timestamp the bot starts querying from
    pub const INITIAL: PollCursor = PollCursor(1_690_008_665);

    /// Raw value for the `from_date` parameter
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Cursor as a UTC date, if it is in chrono's representable range
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.0, 0)
    }
}

impl Default for PollCursor {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_datetime() {
            Some(date) => write!(f, "{} ({})", self.0, date.to_rfc3339()),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_cursor() {
        let cursor = PollCursor::default();
        assert_eq!(cursor.timestamp(), 1690008665);
        assert_eq!(
            cursor.as_datetime().unwrap().to_rfc3339(),
            "2023-07-22T06:51:05+00:00"
        );
    }

    #[test]
    fn test_display_includes_utc_date() {
        assert_eq!(
            PollCursor::INITIAL.to_string(),
            "1690008665 (2023-07-22T06:51:05+00:00)"
        );
    }
}
