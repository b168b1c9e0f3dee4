use std::sync::Arc;

use crate::config::{LlmConfig, DEFAULT_OPENAI_BASE_URL};
use crate::error::{HearthError, Result};
use crate::llm::api::LlmApiClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAI,
    OpenAICompatible { base_url: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    config: Option<Arc<LlmConfig>>,
    client: Option<LlmApiClient>,
}

impl LlmProvider {
    pub fn new(config: Option<&LlmConfig>) -> Self {
        let Some(config) = config else {
            return Self::unavailable("OPENAI_API_KEY is not configured");
        };

        let client = match LlmApiClient::new(config) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "LLM client could not be created");
                return Self::unavailable(&e.to_string());
            }
        };

        let base_url = config.base_url.trim_end_matches('/');
        let backend = if base_url == DEFAULT_OPENAI_BASE_URL {
            LlmBackend::OpenAI
        } else {
            LlmBackend::OpenAICompatible {
                base_url: base_url.to_string(),
            }
        };

        Self {
            backend,
            config: Some(Arc::new(config.clone())),
            client: Some(client),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: LlmBackend::Unavailable {
                reason: reason.to_string(),
            },
            config: None,
            client: None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    pub fn config(&self) -> Option<&LlmConfig> {
        self.config.as_deref()
    }

    /// One chat completion. Unavailable providers fail with a missing credential.
    pub async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        options: Option<&CompletionOptions>,
    ) -> Result<String> {
        let Some(client) = self.client.as_ref() else {
            return Err(HearthError::MissingCredential(self.unavailable_reason()));
        };

        client.complete(prompt, system_prompt, options).await
    }

    fn unavailable_reason(&self) -> String {
        match &self.backend {
            LlmBackend::Unavailable { reason } => reason.clone(),
            _ => "LLM client is not initialized".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_config(base_url: &str) -> LlmConfig {
        LlmConfig {
            model: "gpt-4o-mini".to_string(),
            api_key: "sk-test".to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_no_config_is_unavailable() {
        let provider = LlmProvider::new(None);
        assert!(!provider.is_available());
        assert!(provider.config().is_none());
    }

    #[test]
    fn test_default_base_url_is_openai() {
        let provider = LlmProvider::new(Some(&llm_config("https://api.openai.com/v1/")));
        assert_eq!(provider.backend(), &LlmBackend::OpenAI);
        assert!(provider.is_available());
    }

    #[test]
    fn test_custom_base_url_is_compatible() {
        let provider = LlmProvider::new(Some(&llm_config("http://localhost:11434/v1")));
        assert_eq!(
            provider.backend(),
            &LlmBackend::OpenAICompatible {
                base_url: "http://localhost:11434/v1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unavailable_complete_is_missing_credential() {
        let provider = LlmProvider::unavailable("no key");
        let err = provider.complete("hello", None, None).await.unwrap_err();
        assert!(matches!(err, HearthError::MissingCredential(reason) if reason == "no key"));
    }
}
