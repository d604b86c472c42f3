//! Response validation
//!
//! Checks that a homework statuses body has the documented shape before
//! anything reads from it.

use homework_core::domain::homework::Homework;
use homework_core::dto::statuses::HomeworkStatuses;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

const HOMEWORKS: &str = "homeworks";
const CURRENT_DATE: &str = "current_date";

/// Ways a homework statuses body can be malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("API response is not an object, got {0}")]
    NotAnObject(&'static str),

    #[error("API response is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error("`homeworks` in API response is not a list, got {0}")]
    HomeworksNotAList(&'static str),

    #[error("Malformed homework record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Validates a homework statuses body
///
/// Returns the submissions, newest first, possibly none.
pub fn check_response(body: &Value) -> Result<HomeworkStatuses, ResponseError> {
    let result = validate(body);
    if let Err(e) = &result {
        error!("Invalid API response: {}", e);
    }
    result
}

fn validate(body: &Value) -> Result<HomeworkStatuses, ResponseError> {
    let map = body
        .as_object()
        .ok_or_else(|| ResponseError::NotAnObject(json_type(body)))?;

    let missing: Vec<&'static str> = [HOMEWORKS, CURRENT_DATE]
        .into_iter()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ResponseError::MissingKeys(missing));
    }

    let records = map[HOMEWORKS]
        .as_array()
        .ok_or_else(|| ResponseError::HomeworksNotAList(json_type(&map[HOMEWORKS])))?;

    let newest = match records.first() {
        Some(record) if !record.is_object() => {
            return Err(ResponseError::MalformedRecord {
                index: 0,
                reason: format!("expected an object, got {}", json_type(record)),
            });
        }
        Some(record) => {
            let homework = serde_json::from_value::<Homework>(record.clone()).map_err(|e| {
                ResponseError::MalformedRecord {
                    index: 0,
                    reason: e.to_string(),
                }
            })?;
            Some(homework)
        }
        None => None,
    };

    Ok(HomeworkStatuses {
        homeworks: records.clone(),
        newest,
        current_date: current_date(body),
    })
}

/// Reads `current_date` as whole seconds
///
/// A fractional value is truncated. Anything that is not a number yields
/// `None`.
pub fn current_date(body: &Value) -> Option<i64> {
    let value = body.get(CURRENT_DATE)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|seconds| seconds as i64))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
