use serde::Deserialize;

/// Request body for `POST /v1/study:generate`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct GenerateStudyRequest {
    /// Free-form study notes to build quizzes and facts from.
    pub notes: String,
}
