#![cfg(test)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::AdminConfig;
use crate::features::admin::SessionService;
use crate::features::gems::clients::{TrendingProvider, UpstreamError};
use crate::features::gems::models::TrendingToken;
use crate::features::reports::models::seed_reports;
use crate::features::reports::{InMemoryReportRepository, ReportService};

pub fn create_report_service() -> Arc<ReportService> {
    Arc::new(ReportService::new(Arc::new(InMemoryReportRepository::new(
        seed_reports(),
    ))))
}

/// Session service accepting the default password "GOLD"
pub fn create_session_service() -> Arc<SessionService> {
    Arc::new(SessionService::new(AdminConfig {
        password: AdminConfig::DEFAULT_PASSWORD.to_string(),
        session_ttl: Duration::from_secs(3600),
    }))
}

/// One token earning every bonus, one earning none
pub fn sample_tokens() -> Vec<TrendingToken> {
    vec![
        TrendingToken {
            address: Some("addr-aaa".to_string()),
            symbol: Some("AAA".to_string()),
            name: Some("Token A".to_string()),
            price: Some(1.0),
            logo_uri: None,
            liquidity: Some(15_000.0),
            volume_24h_usd: Some(60_000.0),
            market_cap: None,
            rank: Some(5),
        },
        TrendingToken {
            address: Some("addr-bbb".to_string()),
            symbol: Some("BBB".to_string()),
            name: Some("Token B".to_string()),
            price: Some(0.01),
            logo_uri: None,
            liquidity: Some(5_000.0),
            volume_24h_usd: Some(10_000.0),
            market_cap: None,
            rank: Some(50),
        },
    ]
}

/// In-process trending provider that counts calls and can be switched to fail
pub struct FakeTrendingProvider {
    tokens: Vec<TrendingToken>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeTrendingProvider {
    pub fn new(tokens: Vec<TrendingToken>) -> Self {
        Self {
            tokens,
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendingProvider for FakeTrendingProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingToken>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;

        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::Rejected("simulated outage".to_string()));
        }
        Ok(self.tokens.iter().take(limit).cloned().collect())
    }
}
