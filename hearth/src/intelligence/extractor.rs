use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{HearthError, Result};

use super::types::{ExtractedPayload, QuizItem};

pub const MAX_QUIZZES: usize = 4;
pub const MAX_FACTS: usize = 2;

/// Greedy span from the first `{` to the last `}`. Nested or sibling braces
/// inside the span are not balanced.
fn embedded_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("embedded object pattern is valid"))
}

/// Locate the JSON object embedded in generated text and shape it into an
/// [`ExtractedPayload`].
///
/// Excess quizzes and facts are truncated, and quiz entries with missing
/// fields get empty strings, so any parseable object yields a payload.
pub fn extract(text: &str) -> Result<ExtractedPayload> {
    let span = embedded_object_pattern()
        .find(text)
        .ok_or(HearthError::NoEmbeddedObject)?
        .as_str();

    let object = match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            return Err(HearthError::MalformedObject(format!(
                "expected an object, found {}",
                json_kind(&other)
            )))
        }
        Err(e) => {
            tracing::debug!(
                span_len = span.len(),
                span_preview = %span.chars().take(100).collect::<String>(),
                error = %e,
                "Embedded object failed to parse"
            );
            return Err(HearthError::MalformedObject(e.to_string()));
        }
    };

    let quizzes = list_field(&object, "quizzes")
        .iter()
        .take(MAX_QUIZZES)
        .map(quiz_item)
        .collect();

    let facts = list_field(&object, "facts")
        .iter()
        .take(MAX_FACTS)
        .map(scalar_text)
        .collect();

    Ok(ExtractedPayload { quizzes, facts })
}

fn list_field<'a>(object: &'a Map<String, Value>, field: &str) -> &'a [Value] {
    match object.get(field) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

fn quiz_item(entry: &Value) -> QuizItem {
    let field = |name: &str| {
        entry
            .as_object()
            .and_then(|object| object.get(name))
            .map(scalar_text)
            .unwrap_or_default()
    };

    QuizItem {
        question: field("question"),
        answer: field("answer"),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
