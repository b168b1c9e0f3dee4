use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let emotions = Router::new()
        .route("/", post(handlers::emotions::record_emotion))
        .route("/series", get(handlers::emotions::mood_series));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .route("/study:generate", post(handlers::study::generate_study))
        .route("/recipes:suggest", post(handlers::recipes::suggest_recipe))
        .nest("/emotions", emotions)
}
