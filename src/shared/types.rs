use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `CATEGORY_REMOVED`
    pub error_code: String,
    /// Human-readable description of the failure
    pub description: String,
}
