use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::v1::response::ApiResponse;

#[derive(Error, Debug)]
pub enum HearthError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No embedded JSON object found in generated text")]
    NoEmbeddedObject,

    #[error("Embedded JSON object is malformed: {0}")]
    MalformedObject(String),

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl HearthError {
    /// True for failures that originate at an external inference provider.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            HearthError::Transport(_) | HearthError::Upstream { .. } | HearthError::Llm(_)
        )
    }
}

/// Renders through the v1 envelope so internal details are logged, not returned.
impl IntoResponse for HearthError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, HearthError>;
