//! Homework statuses DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::homework::Homework;

/// Query sent to the homework statuses endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusesQuery {
    /// Lower bound of the polled period, seconds since the Unix epoch
    pub from_date: i64,
}

/// Validated homework statuses response
///
/// `homeworks` is ordered newest first, as the API returns it. Only the
/// newest record is decoded; the older ones are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkStatuses {
    pub homeworks: Vec<Value>,

    /// The first entry of `homeworks`, decoded
    pub newest: Option<Homework>,

    /// Server time of the response, used as the next `from_date`
    pub current_date: Option<i64>,
}

impl HomeworkStatuses {
    /// The most recent submission, if any
    pub fn latest(&self) -> Option<&Homework> {
        self.newest.as_ref()
    }
}
