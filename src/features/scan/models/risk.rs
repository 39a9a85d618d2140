use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    #[serde(rename = "SAFE")]
    Safe,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
}

/// Outcome of a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessment {
    pub risk: RiskLevel,
    /// 0..=100, higher is safer
    pub score: u8,
    pub summary: String,
    /// True when the result was not derived from on-chain data
    pub simulated: bool,
}
