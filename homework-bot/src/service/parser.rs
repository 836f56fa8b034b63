//! Status parsing
//!
//! Turns a homework record into the notification text sent to the student.

use homework_core::domain::homework::HomeworkRecord;
use homework_core::domain::verdict::{Verdict, VerdictCatalog};

use crate::error::PollError;

/// Renders homework records using a verdict catalog
#[derive(Debug, Clone)]
pub struct StatusParser {
    catalog: VerdictCatalog,
}

impl StatusParser {
    /// Creates a parser over the given catalog
    pub fn new(catalog: VerdictCatalog) -> Self {
        Self { catalog }
    }

    /// Builds the notification message for a record
    ///
    /// # Errors
    /// - [`PollError::MissingField`] if `homework_name` or `status` is absent
    /// - [`PollError::UnknownStatus`] if the status is not in the catalog
    /// - [`PollError::MissingVerdict`] if the catalog has no text for it
    pub fn parse(&self, record: &HomeworkRecord) -> Result<String, PollError> {
        let homework_name = record
            .homework_name
            .as_deref()
            .ok_or(PollError::MissingField("homework_name"))?;
        let status = record
            .status
            .as_deref()
            .ok_or(PollError::MissingField("status"))?;

        let verdict = match self.catalog.lookup(status) {
            Verdict::Found(text) => text,
            Verdict::Blank => return Err(PollError::MissingVerdict(status.to_string())),
            Verdict::Unknown => return Err(PollError::UnknownStatus(status.to_string())),
        };

        Ok(format!(
            "Изменился статус проверки работы \"{}\". {}",
            homework_name, verdict
        ))
    }
}

impl Default for StatusParser {
    fn default() -> Self {
        Self::new(VerdictCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_message() {
        let message = StatusParser::default()
            .parse(&HomeworkRecord::new("hw1", "approved"))
            .unwrap();

        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_every_known_status() {
        let parser = StatusParser::default();

        assert_eq!(
            parser.parse(&HomeworkRecord::new("hw2", "reviewing")).unwrap(),
            "Изменился статус проверки работы \"hw2\". Работа взята на проверку ревьюером."
        );
        assert_eq!(
            parser.parse(&HomeworkRecord::new("hw3", "rejected")).unwrap(),
            "Изменился статус проверки работы \"hw3\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_missing_name() {
        let record = HomeworkRecord {
            homework_name: None,
            status: Some("approved".to_string()),
        };
        assert_eq!(
            StatusParser::default().parse(&record),
            Err(PollError::MissingField("homework_name"))
        );
    }

    #[test]
    fn test_missing_status() {
        let record = HomeworkRecord {
            homework_name: Some("hw1".to_string()),
            status: None,
        };
        assert_eq!(
            StatusParser::default().parse(&record),
            Err(PollError::MissingField("status"))
        );
    }

    #[test]
    fn test_name_checked_before_status() {
        assert_eq!(
            StatusParser::default().parse(&HomeworkRecord::default()),
            Err(PollError::MissingField("homework_name"))
        );
    }

    #[test]
    fn test_unknown_status() {
        for status in ["done", "APPROVED", ""] {
            assert_eq!(
                StatusParser::default().parse(&HomeworkRecord::new("hw1", status)),
                Err(PollError::UnknownStatus(status.to_string()))
            );
        }
    }

    #[test]
    fn test_blank_verdict() {
        let parser = StatusParser::new(VerdictCatalog::from_entries([("approved", "")]));
        assert_eq!(
            parser.parse(&HomeworkRecord::new("hw1", "approved")),
            Err(PollError::MissingVerdict("approved".to_string()))
        );
    }
}
