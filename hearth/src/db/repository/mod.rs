mod emotions;
mod recipes;
mod study;

pub use emotions::EmotionRepository;
pub use recipes::RecipeRepository;
pub use study::StudyRepository;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{HearthError, Result};

/// Fixed-width RFC 3339 so `ORDER BY created_at` sorts chronologically.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| HearthError::Internal(format!("Invalid stored timestamp '{value}': {e}")))
}
