//! Status poller
//!
//! Polls the review API, compares the newest submission against the last
//! report sent and forwards changes to the chat. Failures of a cycle are
//! reported the same way as status changes.

use anyhow::Result;
use homework_core::domain::report::Report;
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::PollError;
use crate::repository::{HomeworkRepository, MessageRepository};
use crate::service::{check_response, current_date, parse_status};

/// What a single poll cycle ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new report was delivered
    Sent,

    /// The report equals the last one sent, nothing was delivered
    Unchanged,

    /// A new report could not be delivered; it is retried next cycle
    SendFailed,
}

/// Poller that checks homework statuses on a fixed interval
pub struct StatusPoller {
    config: Config,
    homeworks: Arc<dyn HomeworkRepository>,
    messages: Arc<dyn MessageRepository>,
    /// Lower bound of the next poll, seconds since the Unix epoch
    timestamp: i64,
    /// Last report actually delivered
    last_report: Report,
}

impl StatusPoller {
    /// Creates a new poller starting one retry period in the past
    pub fn new(
        config: Config,
        homeworks: Arc<dyn HomeworkRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        let lookback = i64::try_from(config.retry_period.as_secs()).unwrap_or(i64::MAX);
        let timestamp = chrono::Utc::now().timestamp().saturating_sub(lookback);

        Self {
            config,
            homeworks,
            messages,
            timestamp,
            last_report: Report::default(),
        }
    }

    /// Overrides the lower bound of the next poll
    #[allow(dead_code)]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Lower bound of the next poll
    #[allow(dead_code)]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Last report delivered to the chat
    #[allow(dead_code)]
    pub fn last_report(&self) -> &Report {
        &self.last_report
    }

    /// Starts the polling loop
    ///
    /// Never returns on its own; the process is stopped from outside.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.retry_period
        );

        loop {
            let outcome = self.poll_once().await;
            debug!("Poll cycle finished: {:?}", outcome);

            time::sleep(self.config.retry_period).await;
        }
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> PollOutcome {
        let report = match self.check_statuses().await {
            Ok(report) => report,
            Err(e) => {
                let report = Report::failure(&e);
                error!("{} ({:?})", report.output, e);
                report
            }
        };

        self.dispatch(report).await
    }

    /// Fetches, validates and formats the newest status
    async fn check_statuses(&mut self) -> Result<Report, PollError> {
        let body = self.homeworks.fetch_statuses(self.timestamp).await?;

        self.timestamp = current_date(&body).unwrap_or(self.timestamp);

        let statuses = check_response(&body)?;

        match statuses.latest() {
            Some(homework) => {
                let message = parse_status(homework)?;
                let name = homework.homework_name.clone().unwrap_or_default();
                Ok(Report::status(name, message))
            }
            None => Ok(Report::no_homework()),
        }
    }

    /// Sends the report unless it repeats the last one delivered
    async fn dispatch(&mut self, report: Report) -> PollOutcome {
        if report == self.last_report {
            debug!("No new status");
            return PollOutcome::Unchanged;
        }

        match self.messages.send(&report.output).await {
            Ok(()) => {
                self.last_report = report;
                PollOutcome::Sent
            }
            Err(e) => {
                error!("Failed to deliver report, will retry next cycle: {}", e);
                PollOutcome::SendFailed
            }
        }
    }
}
