use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::gems::services::scoring;

/// Provider-neutral view of one trending token as fetched upstream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingToken {
    pub address: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub logo_uri: Option<String>,
    pub liquidity: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub market_cap: Option<f64>,
    pub rank: Option<u32>,
}

/// A trending token as served by `/api/gems`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendingEntry {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub price: Option<f64>,
    pub logo: Option<String>,
    /// Market cap in USD
    pub mc: Option<f64>,
    /// 24h volume in USD
    pub volume: Option<f64>,
    pub liquidity: Option<f64>,
    pub rank: Option<u32>,
    /// Popularity heuristic in [50, 100]; not a risk assessment
    pub score: u8,
    pub source: String,
}

impl TrendingEntry {
    pub fn from_token(token: TrendingToken, source: &str) -> Self {
        let score = scoring::score(
            token.liquidity.unwrap_or(0.0),
            token.volume_24h_usd.unwrap_or(0.0),
            token.rank,
        );

        Self {
            symbol: token.symbol.unwrap_or_else(|| "???".to_string()),
            name: token.name.unwrap_or_default(),
            address: token.address.unwrap_or_default(),
            price: token.price,
            logo: token.logo_uri,
            mc: token.market_cap,
            volume: token.volume_24h_usd,
            liquidity: token.liquidity,
            rank: token.rank,
            score,
            source: source.to_string(),
        }
    }
}
