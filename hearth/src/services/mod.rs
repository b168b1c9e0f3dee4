mod emotion;
mod recipe;
mod study;

pub use emotion::EmotionService;
pub use recipe::RecipeService;
pub use study::StudyService;

use crate::error::{HearthError, Result};

/// Trimmed input, or a validation error naming `field` when nothing is left.
fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HearthError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

/// Log provider-side failures before they propagate to the caller.
fn log_upstream(model: &str, error: HearthError) -> HearthError {
    if error.is_upstream() {
        tracing::warn!(%model, error = %error, "Inference provider call failed");
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  notes \n", "notes").unwrap(), "notes");
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        let err = require_text(" \t\n", "entry").unwrap_err();
        assert!(matches!(err, HearthError::Validation(msg) if msg == "entry cannot be empty"));
    }
}
