use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::BirdeyeConfig;
use crate::features::gems::clients::{TrendingProvider, UpstreamError};
use crate::features::gems::models::TrendingToken;

/// Envelope of `GET /defi/token_trending`
#[derive(Debug, Deserialize)]
struct TrendingResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<TrendingData>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct TrendingData {
    #[serde(default)]
    tokens: Option<Vec<BirdeyeToken>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BirdeyeToken {
    address: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    #[serde(rename = "logoURI")]
    logo_uri: Option<String>,
    liquidity: Option<f64>,
    #[serde(rename = "volume24hUSD")]
    volume_24h_usd: Option<f64>,
    #[serde(alias = "mc", alias = "fdv")]
    marketcap: Option<f64>,
    rank: Option<u32>,
}

impl From<BirdeyeToken> for TrendingToken {
    fn from(t: BirdeyeToken) -> Self {
        Self {
            address: t.address,
            symbol: t.symbol,
            name: t.name,
            price: t.price,
            logo_uri: t.logo_uri,
            liquidity: t.liquidity,
            volume_24h_usd: t.volume_24h_usd,
            market_cap: t.marketcap,
            rank: t.rank,
        }
    }
}

/// Client for the Birdeye public API
pub struct BirdeyeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    chain: String,
}

impl BirdeyeClient {
    pub fn new(config: &BirdeyeConfig, api_key: String) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent("GoldGuard/0.1 (trending-cache)")
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            chain: config.chain.clone(),
        })
    }
}

#[async_trait]
impl TrendingProvider for BirdeyeClient {
    fn name(&self) -> &'static str {
        "birdeye"
    }

    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingToken>, UpstreamError> {
        let url = format!("{}/defi/token_trending", self.base_url);
        let limit = limit.to_string();

        tracing::debug!("Fetching trending tokens from {} (limit={})", url, limit);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("sort_by", "rank"),
                ("sort_type", "asc"),
                ("offset", "0"),
                ("limit", limit.as_str()),
            ])
            .header("X-API-KEY", &self.api_key)
            .header("x-chain", &self.chain)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TrendingResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        if !payload.success {
            return Err(UpstreamError::Rejected(
                payload
                    .message
                    .unwrap_or_else(|| "success=false".to_string()),
            ));
        }

        let tokens = payload
            .data
            .and_then(|d| d.tokens)
            .unwrap_or_default()
            .into_iter()
            .map(TrendingToken::from)
            .collect::<Vec<_>>();

        tracing::debug!("Birdeye returned {} trending tokens", tokens.len());
        Ok(tokens)
    }
}
