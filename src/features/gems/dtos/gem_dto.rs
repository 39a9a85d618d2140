use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::gems::models::TrendingEntry;
use crate::features::gems::services::GemSnapshot;

/// Response DTO for `/api/gems`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GemsResponseDto {
    pub gems: Vec<TrendingEntry>,
    pub count: usize,
    /// When the served list was fetched upstream; null if never
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<GemSnapshot> for GemsResponseDto {
    fn from(s: GemSnapshot) -> Self {
        Self {
            count: s.gems.len(),
            gems: s.gems,
            updated_at: s.updated_at,
        }
    }
}
