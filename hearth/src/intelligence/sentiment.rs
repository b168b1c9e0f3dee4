use super::types::{Ranking, SentimentScore, NEUTRAL_LABEL};

pub const POSITIVE_LABEL: &str = "POSITIVE";
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Derive a positive/negative pair from a binary sentiment ranking.
///
/// The top entry decides: a POSITIVE score `s` yields `(s, 1 - s)`, a
/// NEGATIVE score yields `(1 - s, s)`. Any other label keeps its name and
/// scores `(0.0, 0.0)`.
pub fn score(ranking: &Ranking) -> SentimentScore {
    let entries = ranking.entries();

    // first occurrence wins on ties
    let Some(best) = entries
        .iter()
        .reduce(|best, entry| if entry.score > best.score { entry } else { best })
    else {
        return neutral(NEUTRAL_LABEL);
    };

    let confidence = best.score.clamp(0.0, 1.0);

    if best.label.eq_ignore_ascii_case(POSITIVE_LABEL) {
        SentimentScore {
            label: POSITIVE_LABEL.to_string(),
            positive: confidence,
            negative: 1.0 - confidence,
        }
    } else if best.label.eq_ignore_ascii_case(NEGATIVE_LABEL) {
        SentimentScore {
            label: NEGATIVE_LABEL.to_string(),
            positive: 1.0 - confidence,
            negative: confidence,
        }
    } else {
        tracing::debug!(label = %best.label, "Top label is not a binary sentiment, scoring as neutral");
        neutral(&best.label)
    }
}

fn neutral(label: &str) -> SentimentScore {
    SentimentScore {
        label: label.to_string(),
        positive: 0.0,
        negative: 0.0,
    }
}
