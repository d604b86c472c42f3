//! Report domain model
//!
//! The content of a notification, compared against the last one sent to
//! decide whether the student needs to hear about it.

/// Sent when the API reports no submissions for the polled period
pub const NO_HOMEWORK: &str = "Нет новых домашних работ за указанный период.";

/// Prefix of every notification about a failed poll
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// A notification payload
///
/// Two reports are equal when both the homework name and the message text
/// match; an equal report is never sent twice in a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Name of the homework the message is about, empty for non-status reports
    pub name: String,

    /// Message text delivered to the chat
    pub output: String,
}

impl Report {
    /// Report about a status change of a named homework
    pub fn status(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
        }
    }

    /// Report for an empty submissions list
    pub fn no_homework() -> Self {
        Self {
            name: String::new(),
            output: NO_HOMEWORK.to_string(),
        }
    }

    /// Report about a failed poll
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            name: String::new(),
            output: format!("{}: {}", FAILURE_PREFIX, error),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output)
    }
}
