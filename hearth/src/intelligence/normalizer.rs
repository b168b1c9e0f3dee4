//! Folds the incompatible response shapes of hosted model families into a
//! [`NormalizedResult`].
//!
//! Text-generation models answer either `[{"generated_text": ...}]` or
//! `{"generated_text": ...}`; classifiers answer `[{"label", "score"}, ...]`,
//! `[[{"label", "score"}, ...]]`, or something model-specific such as
//! `{"labels": [...], "scores": [...]}`. Normalization never fails: generation
//! falls back to the serialized response and classification to a neutral
//! ranking.

use serde_json::{Map, Value};

use super::types::{NormalizedResult, RankedLabel, Ranking, TaskKind};

const GENERATED_TEXT_FIELD: &str = "generated_text";
const LABEL_FIELD: &str = "label";
const SCORE_FIELD: &str = "score";

pub fn normalize(raw: &Value, task: TaskKind) -> NormalizedResult {
    match task {
        TaskKind::Generate => NormalizedResult::Text(generated_text(raw)),
        TaskKind::Classify => NormalizedResult::Ranking(ranking(raw)),
    }
}

fn generated_text(raw: &Value) -> String {
    let field = match raw {
        Value::Array(items) => items
            .first()
            .and_then(Value::as_object)
            .and_then(|first| first.get(GENERATED_TEXT_FIELD)),
        Value::Object(map) => map.get(GENERATED_TEXT_FIELD),
        _ => None,
    };

    match field {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => {
            tracing::debug!("Response carries no generated_text field, serializing raw response");
            raw.to_string()
        }
    }
}

fn ranking(raw: &Value) -> Ranking {
    let Some(items) = raw.as_array().map(|items| unwrap_batch(items)) else {
        tracing::debug!("Classification response is not a list, using neutral ranking");
        return Ranking::neutral();
    };

    let entries: Option<Vec<RankedLabel>> = items
        .iter()
        .map(|item| item.as_object().and_then(ranked_label))
        .collect();

    match entries.and_then(Ranking::from_entries) {
        Some(ranking) => ranking,
        None => {
            tracing::debug!(
                entries = items.len(),
                "Classification response has no usable label/score entries, using neutral ranking"
            );
            Ranking::neutral()
        }
    }
}

/// Single-input classifier calls come back wrapped in one extra list.
fn unwrap_batch(items: &[Value]) -> &[Value] {
    match items {
        [Value::Array(inner)] => inner,
        _ => items,
    }
}

fn ranked_label(entry: &Map<String, Value>) -> Option<RankedLabel> {
    let label = entry.get(LABEL_FIELD)?.as_str()?;
    let score = entry.get(SCORE_FIELD)?.as_f64()?;

    Some(RankedLabel {
        label: label.to_string(),
        score: score.clamp(0.0, 1.0),
    })
}
