use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry together with the sentiment it was scored with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub id: String,
    pub entry_text: String,
    pub score_positive: f64,
    pub score_negative: f64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

/// The slice of an emotion entry the mood chart needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub created_at: DateTime<Utc>,
    pub positive: f64,
    pub negative: f64,
}
