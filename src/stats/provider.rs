//! Sources of wellness stats snapshots.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{StatsEnvelope, WellnessStats};
use crate::traits::{Headers, HttpClient, HttpError};

/// Answers a parameterless query with the current stats, or fails.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch(&self) -> Result<WellnessStats, FetchError>;
}

/// Reads stats from an HTTP endpoint returning `{ "stats": { ... } }`.
pub struct HttpStatsProvider {
    client: Arc<dyn HttpClient>,
    endpoint: String,
    headers: Headers,
}

impl HttpStatsProvider {
    pub fn new(client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            client,
            endpoint: endpoint.into(),
            headers,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatsProvider for HttpStatsProvider {
    async fn fetch(&self) -> Result<WellnessStats, FetchError> {
        let response = self.client.get(&self.endpoint, &self.headers).await?;

        if !response.is_success() {
            return Err(FetchError::Transport(HttpError::ServerError {
                status: response.status,
                message: response.text_lossy(),
            }));
        }

        let envelope: StatsEnvelope = response.json().map_err(FetchError::decode)?;
        Ok(envelope.stats)
    }
}
