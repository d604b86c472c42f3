//! Homework domain model
//!
//! A submission as reported by the review API, and the closed set of
//! review statuses it can be in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// A reviewed submission as it arrives from the API
///
/// `homework_name` and `status` are required by the bot but kept optional
/// here so that a record missing them can still be deserialized and then
/// rejected with a precise error by the status parser. A field of an
/// unexpected type is read as absent, except `status`, which keeps its JSON
/// text so that it is reported as an unknown status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,

    /// Name of the submitted work (usually the repository name)
    #[serde(default, deserialize_with = "lenient")]
    pub homework_name: Option<String>,

    /// Raw status code, see [`HomeworkStatus`]
    #[serde(default, deserialize_with = "status_code")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub lesson_name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub reviewer_comment: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub date_updated: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn status_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(code) => Some(code),
        other => Some(other.to_string()),
    })
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// Review finished, no remarks
    Approved,

    /// A reviewer has picked the work up
    Reviewing,

    /// Review finished with remarks
    Rejected,
}

impl HomeworkStatus {
    /// All recognized statuses
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as sent by the API
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Status code outside the verdict table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected homework status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for HomeworkStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_parse() {
        assert_eq!(
            "approved".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Approved
        );
        assert_eq!(
            "reviewing".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Reviewing
        );
        assert_eq!(
            "rejected".parse::<HomeworkStatus>().unwrap(),
            HomeworkStatus::Rejected
        );
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let err = "unknown_code".parse::<HomeworkStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("unknown_code".to_string()));

        // Codes are case sensitive, as the API sends them lowercase
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let approved = HomeworkStatus::Approved.verdict();
        let reviewing = HomeworkStatus::Reviewing.verdict();
        let rejected = HomeworkStatus::Rejected.verdict();
        assert_ne!(approved, reviewing);
        assert_ne!(reviewing, rejected);
        assert_ne!(approved, rejected);
    }

    #[test]
    fn test_record_with_missing_fields_deserializes() {
        let hw: Homework = serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
        assert_eq!(hw.homework_name, None);
        assert_eq!(hw.status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_full_record_deserializes() {
        let hw: Homework = serde_json::from_str(
            r#"{
                "id": 124,
                "status": "rejected",
                "homework_name": "username__hw_python_oop.zip",
                "reviewer_comment": "Код не по PEP8, нужно исправить",
                "date_updated": "2020-02-13T16:42:47Z",
                "lesson_name": "Итоговый проект"
            }"#,
        )
        .unwrap();
        assert_eq!(hw.id, Some(124));
        assert_eq!(
            hw.homework_name.as_deref(),
            Some("username__hw_python_oop.zip")
        );
        assert_eq!(hw.lesson_name.as_deref(), Some("Итоговый проект"));
    }

    #[test]
    fn test_wrongly_typed_fields_are_dropped() {
        let hw: Homework = serde_json::from_str(
            r#"{
                "id": "x",
                "homework_name": 7,
                "status": "approved",
                "lesson_name": ["a"],
                "date_updated": 1581612167
            }"#,
        )
        .unwrap();
        assert_eq!(hw.id, None);
        assert_eq!(hw.homework_name, None);
        assert_eq!(hw.lesson_name, None);
        assert_eq!(hw.date_updated, None);
        assert_eq!(hw.status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_non_string_status_keeps_its_text() {
        let hw: Homework = serde_json::from_str(r#"{"homework_name": "hw1", "status": 5}"#).unwrap();
        assert_eq!(hw.status.as_deref(), Some("5"));

        let hw: Homework = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(hw.status, None);
    }
}
