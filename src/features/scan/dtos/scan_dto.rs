use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScanRequestDto {
    /// Token or wallet address; recorded but not analysed
    #[serde(default)]
    pub address: Option<String>,
}
