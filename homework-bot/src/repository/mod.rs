//! Repository layer
//!
//! Repositories abstract the two remote services the bot depends on: the
//! homework statuses API and the chat the notifications go to. They hold no
//! business logic.
//!
//! All repositories are trait-based so the scheduler can be tested without a
//! network.

mod homeworks;
mod messages;

// Re-export traits
pub use homeworks::HomeworkRepository;
pub use messages::MessageRepository;

// Re-export implementations
pub use homeworks::HttpHomeworkRepository;
pub use messages::TelegramMessageRepository;
