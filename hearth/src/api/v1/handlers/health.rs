use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;
use crate::llm::LlmBackend;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub inference: InferenceStatus,
    pub llm: LlmStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DatabaseStatus {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct InferenceStatus {
    pub status: String,
    pub question_model: String,
    pub sentiment_model: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LlmStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let db_status = match state.db.ping().await {
        Ok(()) => DatabaseStatus {
            status: "ok".to_string(),
        },
        Err(error) => {
            tracing::warn!(error = %error, "Database health check failed");
            DatabaseStatus {
                status: "error".to_string(),
            }
        }
    };

    let inference_status = InferenceStatus {
        status: if state.gateway.has_credential() {
            "configured".to_string()
        } else {
            "missing_credential".to_string()
        },
        question_model: state.study.model().to_string(),
        sentiment_model: state.emotion.model().to_string(),
    };

    let llm_status = match state.llm.backend() {
        LlmBackend::Unavailable { .. } => LlmStatus {
            status: "fallback".to_string(),
            provider: None,
            model: None,
        },
        backend => {
            let provider = match backend {
                LlmBackend::OpenAI => "openai",
                _ => "openai-compatible",
            };
            LlmStatus {
                status: "available".to_string(),
                provider: Some(provider.to_string()),
                model: state.llm.config().map(|c| c.model.clone()),
            }
        }
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        inference: inference_status,
        llm: llm_status,
    })
}
