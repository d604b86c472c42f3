//! Data Transfer Objects
//!
//! Typed views of the payloads exchanged with the homework statuses API.

pub mod statuses;
