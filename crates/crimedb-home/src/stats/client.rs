use async_trait::async_trait;
use tracing::debug;

use super::model::StatsResponse;
use crate::config::BackendConfig;

/// Failures while reading the stats document.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("unable to build stats client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("stats request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("stats body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("stats response reported success without a data list")]
    MissingData,
}

/// Source of the dashboard statistics document.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self) -> Result<StatsResponse, StatsError>;
}

/// Reads `GET {base_url}/stats` from the CrimeDB backend.
#[derive(Debug, Clone)]
pub struct HttpStatsClient {
    stats_url: String,
    client: reqwest::Client,
}

impl HttpStatsClient {
    pub fn new(config: &BackendConfig) -> Result<Self, StatsError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("crimedb-home/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(StatsError::Client)?;

        Ok(Self {
            stats_url: config.stats_url(),
            client,
        })
    }

    pub fn stats_url(&self) -> &str {
        &self.stats_url
    }
}

#[async_trait]
impl StatsSource for HttpStatsClient {
    async fn fetch_stats(&self) -> Result<StatsResponse, StatsError> {
        let response = self.client.get(&self.stats_url).send().await?;
        // The body alone decides the outcome; error statuses still carry JSON.
        debug!(url = %self.stats_url, status = %response.status(), "stats response received");
        let body = response.bytes().await?;
        Ok(StatsResponse::from_slice(&body)?)
    }
}
