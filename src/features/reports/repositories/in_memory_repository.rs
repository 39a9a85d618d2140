use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::reports::models::{CreateReport, Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::shared::constants::REPORT_ID_START;

struct StoredReport {
    /// Insertion rank; higher is more recent
    seq: u64,
    report: Report,
}

struct Inner {
    records: HashMap<i64, StoredReport>,
    next_id: i64,
    next_seq: u64,
}

/// Process-local report storage, reset on every restart
pub struct InMemoryReportRepository {
    inner: RwLock<Inner>,
}

impl InMemoryReportRepository {
    /// Build a store holding `seed` in the given order.
    ///
    /// Ids are assigned from `REPORT_ID_START` or one above the highest seed id,
    /// whichever is larger.
    pub fn new(seed: Vec<Report>) -> Self {
        let max_seed_id = seed.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = REPORT_ID_START.max(max_seed_id + 1);

        let total = seed.len() as u64;
        let records = seed
            .into_iter()
            .enumerate()
            .map(|(index, report)| {
                let seq = total - index as u64;
                (report.id, StoredReport { seq, report })
            })
            .collect();

        Self {
            inner: RwLock::new(Inner {
                records,
                next_id,
                next_seq: total + 1,
            }),
        }
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn list(&self) -> Result<Vec<Report>> {
        let inner = self.inner.read().await;
        let mut stored: Vec<&StoredReport> = inner.records.values().collect();
        stored.sort_unstable_by(|a, b| b.seq.cmp(&a.seq));
        Ok(stored.into_iter().map(|s| s.report.clone()).collect())
    }

    async fn insert(&self, data: CreateReport) -> Result<Report> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let report = Report {
            id,
            target: data.target,
            desc: data.desc,
            contact: Some(data.contact),
            img: data.img,
            status: ReportStatus::Pending,
            timestamp: Some(chrono::Utc::now().timestamp_millis()),
        };

        inner.records.insert(
            id,
            StoredReport {
                seq,
                report: report.clone(),
            },
        );

        Ok(report)
    }

    async fn approve(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.records.get_mut(&id) {
            Some(stored) => {
                stored.report.status = ReportStatus::Approved;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.records.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::seed_reports;

    fn new_report(target: &str) -> CreateReport {
        CreateReport {
            target: target.to_string(),
            desc: "drains wallets".to_string(),
            contact: "Anon".to_string(),
            img: None,
        }
    }

    #[tokio::test]
    async fn test_seed_order_is_preserved() {
        let repo = InMemoryReportRepository::new(seed_reports());
        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
    }

    #[tokio::test]
    async fn test_inserts_land_at_head() {
        let repo = InMemoryReportRepository::new(seed_reports());
        repo.insert(new_report("first")).await.unwrap();
        repo.insert(new_report("second")).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![201, 200, 101, 102, 103]);
    }

    #[tokio::test]
    async fn test_id_counter_starts_above_seed() {
        let mut seed = seed_reports();
        seed[0].id = 450;
        let repo = InMemoryReportRepository::new(seed);

        let report = repo.insert(new_report("x")).await.unwrap();
        assert_eq!(report.id, 451);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryReportRepository::new(Vec::new());
        let first = repo.insert(new_report("a")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.insert(new_report("b")).await.unwrap();
        assert_eq!(first.id, 200);
        assert_eq!(second.id, 201);
    }

    #[tokio::test]
    async fn test_approve_and_delete_unknown_ids() {
        let repo = InMemoryReportRepository::new(seed_reports());
        assert!(!repo.approve(999).await.unwrap());
        assert!(!repo.delete(999).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }
}
