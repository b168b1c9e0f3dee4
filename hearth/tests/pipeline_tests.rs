use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use hearth::error::HearthError;
use hearth::intelligence::{
    aggregate, extract, normalize, score, ExtractedPayload, NormalizedResult, QuizItem, TaskKind,
};
use hearth::models::MoodRecord;

const TOLERANCE: f64 = 1e-9;

fn quiz(question: &str, answer: &str) -> QuizItem {
    QuizItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[test]
fn test_classification_ranking_is_non_increasing_and_stable() {
    let raw = json!([
        {"label": "A", "score": 0.2},
        {"label": "B", "score": 0.7},
        {"label": "C", "score": 0.2},
        {"label": "D", "score": 0.9},
        {"label": "E", "score": 0.7}
    ]);

    let ranking = normalize(&raw, TaskKind::Classify)
        .into_ranking()
        .expect("classification yields a ranking");

    let order: Vec<&str> = ranking.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(order, vec!["D", "B", "E", "A", "C"]);
    assert!(ranking
        .entries()
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn test_generated_text_is_returned_exactly() {
    let text = "  Q: what?\n{\"quizzes\": []}  ";

    for raw in [json!([{"generated_text": text}]), json!({"generated_text": text})] {
        assert_eq!(
            normalize(&raw, TaskKind::Generate),
            NormalizedResult::Text(text.to_string())
        );
    }
}

#[test]
fn test_extract_truncates_facts() {
    let text = "noise {\"quizzes\":[{\"question\":\"Q1\",\"answer\":\"A1\"}],\"facts\":[\"F1\",\"F2\",\"F3\"]} trailing";

    assert_eq!(
        extract(text).expect("payload should extract"),
        ExtractedPayload {
            quizzes: vec![quiz("Q1", "A1")],
            facts: vec!["F1".to_string(), "F2".to_string()],
        }
    );
}

#[test]
fn test_extract_without_braces_fails() {
    let err = extract("The model only wrote prose here.").unwrap_err();
    assert!(matches!(err, HearthError::NoEmbeddedObject));
}

#[test]
fn test_binary_sentiment_scores() {
    let positive = normalize(&json!([{"label": "POSITIVE", "score": 0.83}]), TaskKind::Classify)
        .into_ranking()
        .expect("ranking");
    let sentiment = score(&positive);
    assert!((sentiment.positive - 0.83).abs() < TOLERANCE);
    assert!((sentiment.negative - 0.17).abs() < TOLERANCE);

    let negative = normalize(&json!([{"label": "NEGATIVE", "score": 0.6}]), TaskKind::Classify)
        .into_ranking()
        .expect("ranking");
    let sentiment = score(&negative);
    assert!((sentiment.positive - 0.4).abs() < TOLERANCE);
    assert!((sentiment.negative - 0.6).abs() < TOLERANCE);
}

#[test]
fn test_binary_sentiment_always_sums_to_one() {
    for label in ["POSITIVE", "NEGATIVE", "positive", "negative"] {
        for step in 0..=20 {
            let confidence = f64::from(step) / 20.0;
            let raw = json!([{"label": label, "score": confidence}]);
            let ranking = normalize(&raw, TaskKind::Classify)
                .into_ranking()
                .expect("ranking");

            let sentiment = score(&ranking);
            assert!(
                (sentiment.positive + sentiment.negative - 1.0).abs() < TOLERANCE,
                "{label} at {confidence} gave {sentiment:?}"
            );
        }
    }
}

#[test]
fn test_aggregate_two_days() {
    let records = [
        MoodRecord {
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap(),
            positive: 0.8,
            negative: 0.2,
        },
        MoodRecord {
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 7, 15, 0).unwrap(),
            positive: 0.3,
            negative: 0.7,
        },
    ];

    let series = aggregate(&records);
    assert_eq!(series.labels, vec!["2024-01-01", "2024-01-02"]);
    assert_eq!(series.scores.len(), 2);
    assert!((series.scores[0] - 0.6).abs() < TOLERANCE);
    assert!((series.scores[1] + 0.4).abs() < TOLERANCE);
}

#[test]
fn test_aggregate_empty() {
    let series = aggregate(&[]);
    assert!(series.labels.is_empty());
    assert!(series.scores.is_empty());
}

#[test]
fn test_normalize_then_extract_is_repeatable() {
    let raw = json!([{
        "generated_text": "Sure! {\"quizzes\": [{\"question\": \"Capital of Kenya?\", \"answer\": \"Nairobi\"}], \"facts\": [\"Lake Victoria is shared by three countries\"]}"
    }]);

    let run = || {
        let text = normalize(&raw, TaskKind::Generate)
            .into_text()
            .expect("generation yields text");
        extract(&text).expect("payload should extract")
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.quizzes, vec![quiz("Capital of Kenya?", "Nairobi")]);
}
