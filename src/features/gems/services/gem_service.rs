use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::features::gems::clients::TrendingProvider;
use crate::features::gems::models::TrendingEntry;

/// What `/api/gems` serves: the current list and when it was fetched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GemSnapshot {
    pub gems: Vec<TrendingEntry>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct GemCache {
    snapshot: GemSnapshot,
    refreshed_at: Option<Instant>,
}

impl GemCache {
    fn is_fresh(&self, ttl: Duration) -> bool {
        !self.snapshot.gems.is_empty() && self.refreshed_at.is_some_and(|t| t.elapsed() < ttl)
    }
}

/// Short-lived cache in front of the trending provider.
///
/// Upstream failures never reach the caller: the last good snapshot is served
/// instead, however old.
pub struct GemService {
    /// `None` when no upstream credential is configured
    provider: Option<Arc<dyn TrendingProvider>>,
    ttl: Duration,
    limit: usize,
    cache: RwLock<GemCache>,
    /// Serializes refreshes so one expired window costs one upstream call
    refresh_lock: Mutex<()>,
}

impl GemService {
    pub fn new(provider: Option<Arc<dyn TrendingProvider>>, ttl: Duration, limit: usize) -> Self {
        Self {
            provider,
            ttl,
            limit,
            cache: RwLock::new(GemCache::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub async fn get_gems(&self) -> GemSnapshot {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return snapshot;
        }

        let Some(provider) = self.provider.as_ref() else {
            // Without a credential the cache is left as is
            tracing::debug!("No trending provider configured, serving empty gem list");
            return GemSnapshot::default();
        };

        let _guard = self.refresh_lock.lock().await;

        // Another request may have refreshed while we waited
        if let Some(snapshot) = self.fresh_snapshot().await {
            return snapshot;
        }

        match provider.fetch_trending(self.limit).await {
            Ok(tokens) => {
                let gems: Vec<TrendingEntry> = tokens
                    .into_iter()
                    .map(|t| TrendingEntry::from_token(t, provider.name()))
                    .collect();

                let snapshot = GemSnapshot {
                    gems,
                    updated_at: Some(Utc::now()),
                };

                let mut cache = self.cache.write().await;
                cache.snapshot = snapshot.clone();
                cache.refreshed_at = Some(Instant::now());

                tracing::info!(
                    "Gem cache refreshed from {}: {} tokens",
                    provider.name(),
                    snapshot.gems.len()
                );
                snapshot
            }
            Err(e) => {
                let cache = self.cache.read().await;
                tracing::error!(
                    "{} error, serving {} cached gems: {}",
                    provider.name(),
                    cache.snapshot.gems.len(),
                    e
                );
                cache.snapshot.clone()
            }
        }
    }

    async fn fresh_snapshot(&self) -> Option<GemSnapshot> {
        let cache = self.cache.read().await;
        cache.is_fresh(self.ttl).then(|| cache.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_tokens, FakeTrendingProvider};

    fn service(provider: &Arc<FakeTrendingProvider>, ttl: Duration) -> GemService {
        let provider: Arc<dyn TrendingProvider> = provider.clone();
        GemService::new(Some(provider), ttl, 10)
    }

    #[tokio::test]
    async fn test_calls_within_window_hit_cache() {
        let provider = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        let service = service(&provider, Duration::from_secs(60));

        let first = service.get_gems().await;
        let second = service.get_gems().await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(first.gems.len(), 2);
        assert_eq!(first.gems[0].score, 100);
        assert_eq!(first.gems[1].score, 50);
        assert_eq!(first.gems[0].source, "fake");
    }

    #[tokio::test]
    async fn test_expired_window_triggers_one_refresh() {
        let provider = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        let service = service(&provider, Duration::from_millis(30));

        service.get_gems().await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        service.get_gems().await;
        service.get_gems().await;

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_serves_stale_cache() {
        let provider = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        let service = service(&provider, Duration::from_millis(10));

        let good = service.get_gems().await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        provider.set_failing(true);
        let stale = service.get_gems().await;

        assert_eq!(provider.calls(), 2);
        assert_eq!(stale, good);
    }

    #[tokio::test]
    async fn test_failure_with_empty_cache_is_empty() {
        let provider = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        provider.set_failing(true);
        let service = service(&provider, Duration::from_secs(60));

        let snapshot = service.get_gems().await;
        assert!(snapshot.gems.is_empty());
        assert!(snapshot.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_empty_upstream_result_is_not_cached_as_fresh() {
        let provider = Arc::new(FakeTrendingProvider::new(Vec::new()));
        let service = service(&provider, Duration::from_secs(60));

        service.get_gems().await;
        service.get_gems().await;

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_without_provider_returns_empty() {
        let service = GemService::new(None, Duration::from_secs(5), 10);
        let snapshot = service.get_gems().await;
        assert_eq!(snapshot, GemSnapshot::default());
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_refresh() {
        let provider = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        let service = Arc::new(service(&provider, Duration::from_secs(60)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.get_gems().await })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().gems.len(), 2);
        }

        assert_eq!(provider.calls(), 1);
    }
}
