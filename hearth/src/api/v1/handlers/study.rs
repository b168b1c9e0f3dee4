//! v1 Study Buddy handlers.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::GenerateStudyRequest;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::intelligence::ExtractedPayload;

/// `POST /api/v1/study:generate`
#[utoipa::path(
    post,
    path = "/api/v1/study:generate",
    tag = "study",
    operation_id = "study.generate",
    request_body = GenerateStudyRequest,
    responses(
        (status = 200, description = "Quizzes and facts generated and stored", body = ExtractedPayload),
        (status = 400, description = "Notes were empty", body = ApiError),
        (status = 422, description = "Model output had no usable JSON object", body = ApiError),
        (status = 501, description = "Inference token not configured", body = ApiError),
        (status = 502, description = "Inference provider failed", body = ApiError),
    )
)]
pub async fn generate_study(
    State(state): State<AppState>,
    AppJson(req): AppJson<GenerateStudyRequest>,
) -> ApiResponse<ExtractedPayload> {
    match state.study.generate(&req.notes).await {
        Ok(payload) => ApiResponse::success(payload),
        Err(e) => e.into(),
    }
}
