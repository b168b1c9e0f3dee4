use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label used when a classifier response carries no usable ranking.
pub const NEUTRAL_LABEL: &str = "NEUTRAL";

/// Whether an inference call is expected to produce free text or a label ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    Generate,
    Classify,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "GENERATE"),
            Self::Classify => write!(f, "CLASSIFY"),
        }
    }
}

/// A single call to a hosted model. Built per request and dropped once the call returns.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub model: String,
    pub payload: Value,
    pub task: TaskKind,
}

impl InferenceRequest {
    pub fn new(model: impl Into<String>, payload: Value, task: TaskKind) -> Self {
        Self {
            model: model.into(),
            payload,
            task,
        }
    }
}

/// One (label, confidence) pair from a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLabel {
    pub label: String,
    pub score: f64,
}

/// Classifier output ordered by descending score.
///
/// Never empty: construction goes through [`Ranking::from_entries`], which
/// refuses an empty list, or [`Ranking::neutral`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedLabel>,
}

impl Ranking {
    /// Stable-sorts `entries` by descending score. Returns `None` for an empty list.
    pub fn from_entries(mut entries: Vec<RankedLabel>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        // sort_by is stable, so equal scores keep their original order
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        Some(Self { entries })
    }

    pub fn neutral() -> Self {
        Self {
            entries: vec![RankedLabel {
                label: NEUTRAL_LABEL.to_string(),
                score: 0.0,
            }],
        }
    }

    pub fn entries(&self) -> &[RankedLabel] {
        &self.entries
    }
}

/// Canonical representation of a provider response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NormalizedResult {
    Text(String),
    Ranking(Ranking),
}

impl NormalizedResult {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Ranking(_) => None,
        }
    }

    pub fn into_ranking(self) -> Option<Ranking> {
        match self {
            Self::Ranking(ranking) => Some(ranking),
            Self::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
}

/// Quizzes and facts pulled out of generated study text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExtractedPayload {
    /// At most four entries.
    pub quizzes: Vec<QuizItem>,
    /// At most two entries.
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SentimentScore {
    pub label: String,
    pub positive: f64,
    pub negative: f64,
}

impl SentimentScore {
    /// Scalar mood index for one journal entry.
    pub fn mood_index(&self) -> f64 {
        self.positive - self.negative
    }
}

/// Chart-ready mood index series. `labels` and `scores` always have equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoodSeries {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

impl MoodSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(label: &str, score: f64) -> RankedLabel {
        RankedLabel {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_ranking_rejects_empty() {
        assert!(Ranking::from_entries(Vec::new()).is_none());
    }

    #[test]
    fn test_ranking_sorts_descending_and_keeps_ties_stable() {
        let ranking = Ranking::from_entries(vec![
            label("a", 0.2),
            label("b", 0.7),
            label("c", 0.2),
            label("d", 0.7),
        ])
        .unwrap();

        let labels: Vec<&str> = ranking.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ranking_serializes_as_plain_list() {
        let ranking = Ranking::from_entries(vec![label("POSITIVE", 0.9)]).unwrap();
        let json = serde_json::to_value(&ranking).unwrap();
        assert_eq!(json, serde_json::json!([{"label": "POSITIVE", "score": 0.9}]));
    }

    #[test]
    fn test_task_kind_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(TaskKind::Classify).unwrap(),
            serde_json::json!("CLASSIFY")
        );
        assert_eq!(TaskKind::Generate.to_string(), "GENERATE");
    }

    #[test]
    fn test_extracted_payload_wire_shape() {
        let payload = ExtractedPayload {
            quizzes: vec![QuizItem {
                question: "Q1".to_string(),
                answer: "A1".to_string(),
            }],
            facts: vec!["F1".to_string()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "quizzes": [{"question": "Q1", "answer": "A1"}],
                "facts": ["F1"]
            })
        );
    }
}
