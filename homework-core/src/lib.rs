//! Homework Core
//!
//! Core types shared by the status client and the bot.
//!
//! This crate contains:
//! - Domain types: review statuses with their verdicts, submission records, reports
//! - DTOs: the validated shape of the homework statuses API response

pub mod domain;
pub mod dto;
