//! Scheduler layer for the bot
//!
//! Drives the poll, compare, notify, sleep cycle and owns the only piece of
//! state the bot has: the last report it sent.

pub mod poller;

pub use poller::{PollOutcome, StatusPoller};
