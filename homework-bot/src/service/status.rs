//! Status parsing
//!
//! Turns a submission record into the notification text.

use homework_core::domain::homework::{Homework, HomeworkStatus, UnknownStatus};
use thiserror::Error;
use tracing::error;

/// A submission that cannot be reported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Homework record is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error(transparent)]
    UnexpectedStatus(#[from] UnknownStatus),
}

/// Formats the status-change message for a submission
pub fn parse_status(homework: &Homework) -> Result<String, StatusError> {
    let name = non_empty(&homework.homework_name);
    let status = non_empty(&homework.status);

    let (name, status) = match (name, status) {
        (Some(name), Some(status)) => (name, status),
        (name, status) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("homework_name");
            }
            if status.is_none() {
                missing.push("status");
            }
            return Err(StatusError::MissingKeys(missing));
        }
    };

    let status = status.parse::<HomeworkStatus>().map_err(|e| {
        error!("Unexpected status of homework {:?}: {}", name, e.0);
        e
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework(name: Option<&str>, status: Option<&str>) -> Homework {
        Homework {
            homework_name: name.map(str::to_string),
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_approved() {
        let message = parse_status(&homework(Some("hw1"), Some("approved"))).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing() {
        let message = parse_status(&homework(Some("hw1"), Some("reviewing"))).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected_contains_name_and_verdict() {
        let message =
            parse_status(&homework(Some("user__hw05_final"), Some("rejected"))).unwrap();
        assert!(message.contains("user__hw05_final"));
        assert!(message.ends_with(HomeworkStatus::Rejected.verdict()));
    }

    #[test]
    fn test_unknown_status() {
        let err = parse_status(&homework(Some("hw1"), Some("unknown_code"))).unwrap_err();
        assert_eq!(
            err,
            StatusError::UnexpectedStatus(UnknownStatus("unknown_code".to_string()))
        );
    }

    #[test]
    fn test_missing_name() {
        let err = parse_status(&homework(None, Some("approved"))).unwrap_err();
        assert_eq!(err, StatusError::MissingKeys(vec!["homework_name"]));
    }

    #[test]
    fn test_empty_fields_count_as_missing() {
        let err = parse_status(&homework(Some(""), Some(""))).unwrap_err();
        assert_eq!(
            err,
            StatusError::MissingKeys(vec!["homework_name", "status"])
        );
    }
}
