use std::sync::Arc;

use chrono::Utc;
use nanoid::nanoid;

use crate::db::DatabaseBackend;
use crate::error::{HearthError, Result};
use crate::inference::InferenceGateway;
use crate::intelligence::{aggregate, score, InferenceRequest, MoodSeries, SentimentScore, TaskKind};
use crate::llm::prompts::sentiment_payload;
use crate::models::EmotionEntry;

use super::{log_upstream, require_text};

#[derive(Clone)]
pub struct EmotionService {
    db: Arc<dyn DatabaseBackend>,
    gateway: InferenceGateway,
    model: String,
}

impl EmotionService {
    pub fn new(db: Arc<dyn DatabaseBackend>, gateway: InferenceGateway, model: String) -> Self {
        Self { db, gateway, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify a journal entry, store it with its scores and return the score.
    pub async fn record(&self, entry: &str) -> Result<SentimentScore> {
        let entry = require_text(entry, "entry")?;

        let request =
            InferenceRequest::new(&self.model, sentiment_payload(entry), TaskKind::Classify);

        let ranking = self
            .gateway
            .run(&request)
            .await
            .map_err(|e| log_upstream(&self.model, e))?
            .into_ranking()
            .ok_or_else(|| {
                HearthError::Internal("Classification did not normalize to a ranking".to_string())
            })?;

        let sentiment = score(&ranking);

        self.db
            .append_emotion_entry(&EmotionEntry {
                id: nanoid!(),
                entry_text: entry.to_string(),
                score_positive: sentiment.positive,
                score_negative: sentiment.negative,
                label: sentiment.label.clone(),
                created_at: Utc::now(),
            })
            .await?;

        tracing::debug!(
            label = %sentiment.label,
            mood_index = sentiment.mood_index(),
            "Emotion entry recorded"
        );

        Ok(sentiment)
    }

    /// Mood index per stored entry, oldest first.
    pub async fn mood_series(&self) -> Result<MoodSeries> {
        let records = self.db.list_mood_records().await?;
        Ok(aggregate(&records))
    }
}
