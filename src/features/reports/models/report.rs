use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Moderation status of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Approved,
}

/// A scam report as stored and served to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: i64,
    /// Identifies the scam entity (wallet, token, handle...)
    pub target: String,
    pub desc: String,
    /// Absent on seed records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Inline image payload (base64)
    pub img: Option<String>,
    pub status: ReportStatus,
    /// Epoch milliseconds; only user submissions carry it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Validated data for a new submission, before an id is assigned
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub target: String,
    pub desc: String,
    pub contact: String,
    pub img: Option<String>,
}

/// Moderation actions accepted by `/report/action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Delete,
    /// Anything else; handled as a no-op
    #[default]
    #[serde(other)]
    Unknown,
}

/// Records present on every fresh start
pub fn seed_reports() -> Vec<Report> {
    [
        (
            101,
            "FakePhantom_V2",
            "Wallet drainer impersonating Phantom update.",
        ),
        (
            102,
            "SolanaGiveaway_X",
            "Classic double-your-sol scam contract.",
        ),
        (
            103,
            "MemeCoin_Rug_33",
            "Liquidity pulled immediately after launch.",
        ),
    ]
    .into_iter()
    .map(|(id, target, desc)| Report {
        id,
        target: target.to_string(),
        desc: desc.to_string(),
        contact: None,
        img: None,
        status: ReportStatus::Approved,
        timestamp: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_report_serialization_omits_contact_and_timestamp() {
        let seed = &seed_reports()[0];
        let json = serde_json::to_value(seed).unwrap();

        assert_eq!(json["id"], 101);
        assert_eq!(json["status"], "approved");
        assert!(json["img"].is_null());
        assert!(json.get("contact").is_none());
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_moderation_action_unknown_values() {
        let approve: ModerationAction = serde_json::from_str("\"approve\"").unwrap();
        let delete: ModerationAction = serde_json::from_str("\"delete\"").unwrap();
        let other: ModerationAction = serde_json::from_str("\"reject\"").unwrap();

        assert_eq!(approve, ModerationAction::Approve);
        assert_eq!(delete, ModerationAction::Delete);
        assert_eq!(other, ModerationAction::Unknown);
    }
}
