//! v1 Emotion Tracker handlers.

use axum::{extract::State, Json};

use crate::api::extractors::AppJson;
use crate::api::v1::dto::RecordEmotionRequest;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::Result;
use crate::intelligence::{MoodSeries, SentimentScore};

/// `POST /api/v1/emotions`
#[utoipa::path(
    post,
    path = "/api/v1/emotions",
    tag = "emotions",
    operation_id = "emotions.record",
    request_body = RecordEmotionRequest,
    responses(
        (status = 201, description = "Entry scored and stored", body = SentimentScore),
        (status = 400, description = "Entry was empty", body = ApiError),
        (status = 501, description = "Inference token not configured", body = ApiError),
        (status = 502, description = "Inference provider failed", body = ApiError),
    )
)]
pub async fn record_emotion(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecordEmotionRequest>,
) -> ApiResponse<SentimentScore> {
    match state.emotion.record(&req.entry).await {
        Ok(score) => ApiResponse::created(score),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/emotions/series`
#[utoipa::path(
    get,
    path = "/api/v1/emotions/series",
    tag = "emotions",
    operation_id = "emotions.series",
    responses(
        (status = 200, description = "Mood index per entry, oldest first", body = MoodSeries),
    )
)]
pub async fn mood_series(State(state): State<AppState>) -> ApiResponse<MoodSeries> {
    match state.emotion.mood_series().await {
        Ok(series) => ApiResponse::success(series),
        Err(e) => e.into(),
    }
}

/// `GET /api/emotions`: the same series without the envelope.
pub async fn chart_series(State(state): State<AppState>) -> Result<Json<MoodSeries>> {
    Ok(Json(state.emotion.mood_series().await?))
}
