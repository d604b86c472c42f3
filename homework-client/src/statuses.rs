//! Homework statuses endpoint

use crate::PracticumClient;
use crate::error::{ClientError, Result};
use homework_core::dto::statuses::StatusesQuery;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{error, info};

impl PracticumClient {
    /// Fetch the statuses of homeworks updated since `from_date`
    ///
    /// The body is returned as raw JSON; checking its shape is up to the
    /// caller, so that a malformed answer can be told apart from a failed
    /// request.
    ///
    /// # Arguments
    /// * `from_date` - Lower bound of the period, seconds since the Unix epoch
    ///
    /// # Errors
    /// * [`ClientError::Connection`] if no response arrived
    /// * [`ClientError::Timeout`] if the configured timeout elapsed
    /// * [`ClientError::WrongApiResponseCode`] for any status other than 200
    /// * [`ClientError::ParseError`] if the body is not JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let query = StatusesQuery { from_date };

        info!(
            "Requesting homework statuses from {} (from_date={})",
            self.endpoint, from_date
        );

        let result = self.fetch(&query).await;
        if let Err(e) = &result {
            error!("Homework statuses request failed: {}", e);
        }
        result
    }

    async fn fetch(&self, query: &StatusesQuery) -> Result<Value> {
        let params = format!("{{from_date: {}}}", query.from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(e, params.clone()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(ClientError::wrong_status(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, params))?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
