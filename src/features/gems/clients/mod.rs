mod birdeye_client;

pub use birdeye_client::BirdeyeClient;

use async_trait::async_trait;

use crate::features::gems::models::TrendingToken;

/// Source of trending token data
#[async_trait]
pub trait TrendingProvider: Send + Sync {
    /// Short label stored on every entry as `source`
    fn name(&self) -> &'static str;

    /// Top `limit` tokens ordered by upstream rank
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingToken>, UpstreamError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Upstream rejected request: {0}")]
    Rejected(String),
}
