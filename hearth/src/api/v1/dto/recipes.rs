use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/recipes:suggest`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SuggestRecipeRequest {
    /// Ingredients on hand or a dietary goal.
    pub ingredients: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RecipeResponse {
    pub suggestion: String,
}
