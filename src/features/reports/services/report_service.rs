use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::models::{CreateReport, ModerationAction, Report};
use crate::features::reports::repositories::ReportRepository;

/// Service for report submission and moderation
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    /// Full collection, most recent first, pending and approved together
    pub async fn list(&self) -> Result<Vec<Report>> {
        let reports = self.repository.list().await?;
        tracing::info!("Report list requested: {} records", reports.len());
        Ok(reports)
    }

    pub async fn submit(&self, data: CreateReport) -> Result<Report> {
        let report = self.repository.insert(data).await?;
        tracing::info!(
            "New report received: id={}, target={}",
            report.id,
            report.target
        );
        Ok(report)
    }

    /// Apply a moderation action and return the resulting collection.
    ///
    /// Unknown ids and unknown actions leave the store unchanged.
    pub async fn moderate(&self, id: Option<i64>, action: ModerationAction) -> Result<Vec<Report>> {
        let applied = match (action, id) {
            (ModerationAction::Delete, Some(id)) => self.repository.delete(id).await?,
            (ModerationAction::Approve, Some(id)) => self.repository.approve(id).await?,
            _ => false,
        };

        if applied {
            tracing::info!("Moderation applied: action={:?}, id={:?}", action, id);
        } else {
            tracing::debug!("Moderation no-op: action={:?}, id={:?}", action, id);
        }

        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{seed_reports, ReportStatus};
    use crate::features::reports::repositories::InMemoryReportRepository;
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;

    fn service() -> ReportService {
        ReportService::new(Arc::new(InMemoryReportRepository::new(seed_reports())))
    }

    fn create(target: &str, desc: &str) -> CreateReport {
        CreateReport {
            target: target.to_string(),
            desc: desc.to_string(),
            contact: "Anon".to_string(),
            img: None,
        }
    }

    #[tokio::test]
    async fn test_submit_assigns_pending_with_defaults() {
        let service = service();
        let report = service.submit(create("ScamX", "steals funds")).await.unwrap();

        assert_eq!(report.id, 200);
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.contact.as_deref(), Some("Anon"));
        assert!(report.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_submissions_get_increasing_ids_at_head() {
        let service = service();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let target: String = Word().fake();
            let desc: String = Sentence(3..8).fake();
            let report = service.submit(create(&target, &desc)).await.unwrap();

            let head = service.list().await.unwrap()[0].clone();
            assert_eq!(head, report);
            ids.push(report.id);
        }

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(service.list().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_approve_is_idempotent() {
        let service = service();
        let report = service.submit(create("ScamX", "steals funds")).await.unwrap();

        let once = service
            .moderate(Some(report.id), ModerationAction::Approve)
            .await
            .unwrap();
        let twice = service
            .moderate(Some(report.id), ModerationAction::Approve)
            .await
            .unwrap();

        assert_eq!(once, twice);
        assert_eq!(once[0].status, ReportStatus::Approved);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = service();
        let list = service
            .moderate(Some(102), ModerationAction::Delete)
            .await
            .unwrap();

        let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 103]);
    }

    #[tokio::test]
    async fn test_noop_moderation_leaves_store_unchanged() {
        let service = service();
        let before = service.list().await.unwrap();

        let unknown_id = service
            .moderate(Some(999), ModerationAction::Delete)
            .await
            .unwrap();
        let unknown_action = service
            .moderate(Some(101), ModerationAction::Unknown)
            .await
            .unwrap();
        let missing_id = service.moderate(None, ModerationAction::Approve).await.unwrap();

        assert_eq!(unknown_id, before);
        assert_eq!(unknown_action, before);
        assert_eq!(missing_id, before);
    }
}
