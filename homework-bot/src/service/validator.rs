//! Response validation
//!
//! Checks the contract of the status API payload. Only the top-level shape
//! is enforced here; the single homework entry the bot acts on is decoded
//! into a [`HomeworkRecord`] when it is selected.

use homework_core::domain::homework::HomeworkRecord;
use homework_core::dto::status::ApiResponse;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::PollError;

/// Keys every status response must carry
const REQUIRED_KEYS: [&str; 2] = ["homeworks", "current_date"];

/// Validates raw status API payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks the payload shape
    ///
    /// Values inside `homeworks` and the value of `current_date` are not
    /// inspected.
    ///
    /// # Errors
    /// - [`PollError::Shape`] if the payload is not an object or `homeworks`
    ///   is not an array
    /// - [`PollError::MissingField`] if a required key is absent
    pub fn validate(&self, payload: JsonValue) -> Result<ApiResponse, PollError> {
        let JsonValue::Object(mut map) = payload else {
            return Err(PollError::Shape("Ответ не является словарём".to_string()));
        };

        if let Some(key) = REQUIRED_KEYS.into_iter().find(|key| !map.contains_key(*key)) {
            return Err(PollError::MissingField(key));
        }

        let homeworks = match map.remove("homeworks") {
            Some(JsonValue::Array(homeworks)) => homeworks,
            _ => {
                return Err(PollError::Shape(
                    "Данные домашки не представлены в виде списка".to_string(),
                ));
            }
        };
        let current_date = map.remove("current_date").unwrap_or_default();

        debug!(
            "Status response accepted: {} homework(s), current_date={}",
            homeworks.len(),
            current_date
        );

        Ok(ApiResponse {
            homeworks,
            current_date,
        })
    }

    /// Decodes the most recent homework entry
    ///
    /// # Errors
    /// - [`PollError::EmptyQueue`] if `homeworks` is empty
    /// - [`PollError::Shape`] if the entry is not an object, or its
    ///   `homework_name`/`status` is not a string
    pub fn latest_record(&self, response: &ApiResponse) -> Result<HomeworkRecord, PollError> {
        let entry = response.latest().ok_or(PollError::EmptyQueue)?;

        if !entry.is_object() {
            return Err(PollError::Shape(
                "Данные о домашней работе не являются словарём".to_string(),
            ));
        }

        serde_json::from_value(entry.clone()).map_err(|e| {
            PollError::Shape(format!("Некорректные данные о домашней работе: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(payload: JsonValue) -> Result<ApiResponse, PollError> {
        ResponseValidator::new().validate(payload)
    }

    fn latest(payload: JsonValue) -> Result<HomeworkRecord, PollError> {
        let validator = ResponseValidator::new();
        validator.latest_record(&validator.validate(payload)?)
    }

    #[test]
    fn test_valid_response() {
        let response = validate(json!({
            "homeworks": [{ "homework_name": "hw1", "status": "approved", "id": 1 }],
            "current_date": 1690100000
        }))
        .unwrap();

        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.current_date, json!(1690100000));
    }

    #[test]
    fn test_empty_homeworks_is_valid() {
        let response = validate(json!({ "homeworks": [], "current_date": 0 })).unwrap();
        assert!(response.homeworks.is_empty());
    }

    #[test]
    fn test_non_mapping_payloads() {
        for payload in [
            json!([]),
            json!([{ "homeworks": [] }]),
            json!("homeworks"),
            json!(42),
            JsonValue::Null,
        ] {
            assert!(
                matches!(validate(payload.clone()), Err(PollError::Shape(_))),
                "payload {} should be rejected",
                payload
            );
        }
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(
            validate(json!({ "current_date": 0 })),
            Err(PollError::MissingField("homeworks"))
        );
        assert_eq!(
            validate(json!({ "homeworks": [] })),
            Err(PollError::MissingField("current_date"))
        );
        assert_eq!(validate(json!({})), Err(PollError::MissingField("homeworks")));
    }

    #[test]
    fn test_missing_key_reported_before_wrong_type() {
        assert_eq!(
            validate(json!({ "homeworks": "hw1" })),
            Err(PollError::MissingField("current_date"))
        );
    }

    #[test]
    fn test_homeworks_not_a_list() {
        for homeworks in [json!({ "homework_name": "hw1" }), json!("hw1"), JsonValue::Null] {
            let err = validate(json!({ "homeworks": homeworks, "current_date": 0 })).unwrap_err();
            assert_eq!(
                err,
                PollError::Shape("Данные домашки не представлены в виде списка".to_string())
            );
        }
    }

    #[test]
    fn test_current_date_value_is_not_checked() {
        for current_date in [
            JsonValue::Null,
            json!(1690100000.5),
            json!("2023-07-22"),
            json!({ "seconds": 1 }),
        ] {
            let response = validate(json!({
                "homeworks": [],
                "current_date": current_date.clone()
            }))
            .unwrap();
            assert_eq!(response.current_date, current_date);
        }
    }

    #[test]
    fn test_entries_after_the_first_are_not_checked() {
        let record = latest(json!({
            "homeworks": [
                { "homework_name": "hw1", "status": "approved" },
                "junk",
                { "homework_name": 17 }
            ],
            "current_date": 1
        }))
        .unwrap();

        assert_eq!(record, HomeworkRecord::new("hw1", "approved"));
    }

    #[test]
    fn test_latest_record_of_empty_list() {
        assert_eq!(
            latest(json!({ "homeworks": [], "current_date": 1 })),
            Err(PollError::EmptyQueue)
        );
    }

    #[test]
    fn test_latest_record_not_a_mapping() {
        for entry in [json!("junk"), json!(["hw1", "approved"]), JsonValue::Null] {
            let err = latest(json!({ "homeworks": [entry], "current_date": 1 })).unwrap_err();
            assert!(matches!(err, PollError::Shape(_)));
        }
    }

    #[test]
    fn test_latest_record_with_missing_fields_still_decodes() {
        let record = latest(json!({ "homeworks": [{ "status": "approved" }], "current_date": 1 }))
            .unwrap();
        assert_eq!(record.homework_name, None);
    }

    #[test]
    fn test_wrongly_typed_record_field() {
        let err = latest(json!({
            "homeworks": [{ "homework_name": 17, "status": "approved" }],
            "current_date": 0
        }))
        .unwrap_err();

        assert!(matches!(err, PollError::Shape(_)));
    }
}
