use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use std::time::Duration;

use crate::config::InferenceConfig;
use crate::error::{HearthError, Result};
use crate::intelligence::{normalize, InferenceRequest, NormalizedResult};

/// Client for hosted model endpoints addressed as `{base_url}/models/{model}`.
///
/// Each call is a single POST bounded by the configured timeout. Failures are
/// returned as-is; nothing is retried.
#[derive(Clone)]
pub struct InferenceGateway {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl InferenceGateway {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HearthError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.api_token.is_some()
    }

    /// POST `payload` to the model endpoint and return the decoded JSON body.
    pub async fn call(&self, model: &str, payload: &Value) -> Result<Value> {
        let Some(api_token) = self.api_token.as_deref() else {
            return Err(HearthError::MissingCredential(
                "HF_API_TOKEN is not configured".to_string(),
            ));
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_token}")).map_err(|e| {
                HearthError::MissingCredential(format!("Invalid API token header: {e}"))
            })?,
        );

        let url = format!("{}/models/{}", self.base_url, model);
        tracing::debug!(%model, "Calling inference endpoint");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%model, error = %e, timeout = e.is_timeout(), "Inference request failed");
                HearthError::Transport(format!("Request to {model} failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%model, status = status.as_u16(), "Inference endpoint returned an error");
            return Err(HearthError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            HearthError::Transport(format!("Failed to decode response from {model}: {e}"))
        })
    }

    /// Call the request's model and normalize the response for its task kind.
    pub async fn run(&self, request: &InferenceRequest) -> Result<NormalizedResult> {
        let raw = self.call(&request.model, &request.payload).await?;
        Ok(normalize(&raw, request.task))
    }
}
