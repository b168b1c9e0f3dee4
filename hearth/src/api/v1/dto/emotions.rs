use serde::Deserialize;

/// Request body for `POST /v1/emotions`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RecordEmotionRequest {
    /// Journal text describing the day.
    pub entry: String,
}
