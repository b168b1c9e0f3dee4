//! v1 Recipe Recommender handlers.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{RecipeResponse, SuggestRecipeRequest};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `POST /api/v1/recipes:suggest`
#[utoipa::path(
    post,
    path = "/api/v1/recipes:suggest",
    tag = "recipes",
    operation_id = "recipes.suggest",
    request_body = SuggestRecipeRequest,
    responses(
        (status = 200, description = "Suggestion generated and stored", body = RecipeResponse),
        (status = 400, description = "Input was empty", body = ApiError),
        (status = 502, description = "Chat model failed", body = ApiError),
    )
)]
pub async fn suggest_recipe(
    State(state): State<AppState>,
    AppJson(req): AppJson<SuggestRecipeRequest>,
) -> ApiResponse<RecipeResponse> {
    match state.recipe.suggest(&req.ingredients).await {
        Ok(suggestion) => ApiResponse::success(RecipeResponse { suggestion }),
        Err(e) => e.into(),
    }
}
