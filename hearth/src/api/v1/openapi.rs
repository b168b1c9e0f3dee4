use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::intelligence;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hearth API",
        version = "1.0.0",
        description = "Study Buddy, Emotion Tracker and Recipe Recommender backed by hosted models.",
    ),
    paths(
        handlers::health::health_check,
        handlers::study::generate_study,
        handlers::emotions::record_emotion,
        handlers::emotions::mood_series,
        handlers::recipes::suggest_recipe,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Requests
        dto::GenerateStudyRequest,
        dto::RecordEmotionRequest,
        dto::SuggestRecipeRequest,
        // Responses
        dto::RecipeResponse,
        intelligence::ExtractedPayload,
        intelligence::QuizItem,
        intelligence::SentimentScore,
        intelligence::MoodSeries,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::InferenceStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "study", description = "Quiz and fact generation from study notes"),
        (name = "emotions", description = "Journal sentiment scoring and mood series"),
        (name = "recipes", description = "Recipe suggestions"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
