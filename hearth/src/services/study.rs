use std::sync::Arc;

use crate::db::DatabaseBackend;
use crate::error::{HearthError, Result};
use crate::inference::InferenceGateway;
use crate::intelligence::{extract, ExtractedPayload, InferenceRequest, TaskKind};
use crate::llm::prompts::{study_payload, study_prompt};

use super::{log_upstream, require_text};

/// Turns study notes into quizzes, flashcards and "did you know" facts.
#[derive(Clone)]
pub struct StudyService {
    db: Arc<dyn DatabaseBackend>,
    gateway: InferenceGateway,
    model: String,
}

impl StudyService {
    pub fn new(db: Arc<dyn DatabaseBackend>, gateway: InferenceGateway, model: String) -> Self {
        Self { db, gateway, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate study material from `notes` and persist it.
    ///
    /// Nothing is written unless the model call and extraction both succeed,
    /// and the three tables are written in a single transaction.
    pub async fn generate(&self, notes: &str) -> Result<ExtractedPayload> {
        let notes = require_text(notes, "notes")?;

        let prompt = study_prompt(notes);
        let request = InferenceRequest::new(&self.model, study_payload(&prompt), TaskKind::Generate);

        let text = self
            .gateway
            .run(&request)
            .await
            .map_err(|e| log_upstream(&self.model, e))?
            .into_text()
            .ok_or_else(|| {
                HearthError::Internal("Generation did not normalize to text".to_string())
            })?;

        let payload = extract(&text).map_err(|e| {
            tracing::warn!(model = %self.model, error = %e, "Generated text had no usable JSON");
            e
        })?;

        self.db.append_study_material(notes, &payload).await?;

        tracing::info!(
            quizzes = payload.quizzes.len(),
            facts = payload.facts.len(),
            "Study material generated"
        );

        Ok(payload)
    }
}
