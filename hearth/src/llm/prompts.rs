//! Prompt templates and request payloads for the hosted models.

use serde_json::{json, Value};

/// Token budget for study-note generation.
pub const STUDY_MAX_NEW_TOKENS: u32 = 256;

pub const RECIPE_SYSTEM_PROMPT: &str =
    "You are a helpful nutrition assistant for Kenyan households.";

pub const RECIPE_TEMPERATURE: f32 = 0.7;

/// Returned instead of a completion when no chat model is configured.
pub const RECIPE_FALLBACK: &str = "Try a balanced meal: ugali with sukuma wiki and grilled tilapia; add fruits like mango or banana for dessert.";

/// Build the instruction asking a text-generation model for quizzes and facts.
///
/// ```
/// use hearth::llm::prompts::study_prompt;
///
/// let prompt = study_prompt("Water boils at 100C at sea level.");
/// assert!(prompt.ends_with("Notes:\nWater boils at 100C at sea level."));
/// ```
pub fn study_prompt(notes: &str) -> String {
    format!(
        "Generate exactly 4 quiz questions with short answers and exactly 2 'Did you know?' facts \
from the following study notes. Return JSON with keys 'quizzes' (list of {{question, answer}}) \
and 'facts' (list of strings). Notes:\n{notes}"
    )
}

pub fn study_payload(prompt: &str) -> Value {
    json!({
        "inputs": prompt,
        "parameters": { "max_new_tokens": STUDY_MAX_NEW_TOKENS }
    })
}

pub fn sentiment_payload(entry: &str) -> Value {
    json!({ "inputs": entry })
}

pub fn recipe_prompt(ingredients: &str) -> String {
    format!(
        "Suggest 3 healthy, budget-friendly Kenyan recipes based on these ingredients or goals. \
Return bullet points with title and short method. Ingredients/goals: {ingredients}"
    )
}
