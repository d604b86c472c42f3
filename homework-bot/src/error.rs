//! Poll cycle errors

use homework_client::ClientError;
use thiserror::Error;

use crate::service::{ResponseError, StatusError};

/// Anything that can go wrong between fetching statuses and formatting the
/// notification
///
/// None of these stop the bot: the failure is reported to the chat and the
/// next poll starts over.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] ClientError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Status(#[from] StatusError),
}
