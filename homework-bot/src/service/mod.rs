//! Service layer
//!
//! Pure business logic of the bot: checking the shape of an API answer and
//! turning a submission into the text the student receives.

mod response;
mod status;

pub use response::{ResponseError, check_response, current_date};
pub use status::{StatusError, parse_status};
