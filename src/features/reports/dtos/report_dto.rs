use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{CreateReport, ModerationAction, Report};
use crate::shared::constants::DEFAULT_CONTACT;

/// Request DTO for a new scam report
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitReportDto {
    /// Scam entity being reported (required)
    #[serde(default)]
    #[validate(
        required(message = "target is required"),
        length(min = 1, message = "target is required")
    )]
    pub target: Option<String>,

    /// What happened (required)
    #[serde(default)]
    #[validate(
        required(message = "desc is required"),
        length(min = 1, message = "desc is required")
    )]
    pub desc: Option<String>,

    /// How to reach the reporter; defaults to "Anon"
    #[serde(default)]
    pub contact: Option<String>,

    /// Base64 image evidence
    #[serde(default)]
    pub img: Option<String>,
}

impl SubmitReportDto {
    /// Normalise optional fields. Call after `validate()`.
    pub fn into_create_report(self) -> CreateReport {
        CreateReport {
            target: self.target.unwrap_or_default(),
            desc: self.desc.unwrap_or_default(),
            contact: self
                .contact
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT.to_string()),
            img: self.img.filter(|i| !i.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub success: bool,
    pub report: Report,
}

/// Request DTO for an admin moderation action
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReportActionDto {
    /// Report id, as a number or numeric string
    #[serde(default, deserialize_with = "deserialize_report_id")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<i64>,

    /// Unrecognised or non-string values become `Unknown`
    #[serde(default, deserialize_with = "deserialize_action")]
    pub action: ModerationAction,

    /// Session token from `/admin/login`
    #[serde(default, deserialize_with = "deserialize_token")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportActionResponseDto {
    pub success: bool,
    pub list: Vec<Report>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReportId {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}

/// Accepts `12`, `12.0` or `"12"`; anything else becomes `None` and matches no report.
fn deserialize_report_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawReportId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawReportId::Int(id)) => Some(id),
        Some(RawReportId::Float(id)) => whole_number(id),
        Some(RawReportId::Text(text)) => {
            let text = text.trim();
            text.parse()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
        Some(RawReportId::Other(_)) | None => None,
    })
}

fn deserialize_action<'de, D>(deserializer: D) -> Result<ModerationAction, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw.as_ref().and_then(Value::as_str) {
        Some("approve") => ModerationAction::Approve,
        Some("delete") => ModerationAction::Delete,
        _ => ModerationAction::Unknown,
    })
}

/// Non-string tokens are treated as absent
fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(token)) => Some(token),
        _ => None,
    })
}
