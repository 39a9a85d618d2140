mod in_memory_repository;

pub use in_memory_repository::InMemoryReportRepository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reports::models::{CreateReport, Report};

/// Storage seam for reports.
///
/// Listing order is most-recent-first: every insert lands at the head.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Report>>;

    /// Assign the next id and store the report as pending
    async fn insert(&self, data: CreateReport) -> Result<Report>;

    /// Mark a report approved. Returns false when the id is unknown.
    async fn approve(&self, id: i64) -> Result<bool>;

    /// Remove a report. Returns false when the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool>;
}
