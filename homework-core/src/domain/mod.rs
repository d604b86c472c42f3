//! Core domain types
//!
//! The review status vocabulary and the report that drives change detection.
//! These types carry no I/O; fetching and sending live in the client crate.

pub mod homework;
pub mod report;
