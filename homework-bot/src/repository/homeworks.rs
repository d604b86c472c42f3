//! Homeworks repository
//!
//! Fetches raw homework statuses from the review API.

use async_trait::async_trait;
use homework_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches statuses of homeworks updated since `from_date`
    ///
    /// Returns the raw JSON body; its shape is checked by the response
    /// validator so that a malformed answer is reported as such.
    ///
    /// # Arguments
    /// * `from_date` - Lower bound of the period, seconds since the Unix epoch
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        self.client.homework_statuses(from_date).await
    }
}
