use std::sync::Arc;

use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::llm::prompts::{recipe_prompt, RECIPE_FALLBACK, RECIPE_SYSTEM_PROMPT, RECIPE_TEMPERATURE};
use crate::llm::{CompletionOptions, LlmProvider};

use super::require_text;

#[derive(Clone)]
pub struct RecipeService {
    db: Arc<dyn DatabaseBackend>,
    llm: LlmProvider,
}

impl RecipeService {
    pub fn new(db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        Self { db, llm }
    }

    pub fn llm(&self) -> &LlmProvider {
        &self.llm
    }

    /// Suggest recipes for the given ingredients or goals and store the suggestion.
    ///
    /// Without a configured chat model a fixed suggestion is returned and stored.
    pub async fn suggest(&self, ingredients: &str) -> Result<String> {
        let ingredients = require_text(ingredients, "ingredients")?;

        let suggestion = if self.llm.is_available() {
            let options = CompletionOptions {
                temperature: Some(RECIPE_TEMPERATURE),
                ..Default::default()
            };
            self.llm
                .complete(
                    &recipe_prompt(ingredients),
                    Some(RECIPE_SYSTEM_PROMPT),
                    Some(&options),
                )
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Recipe completion failed");
                    e
                })?
        } else {
            RECIPE_FALLBACK.to_string()
        };

        self.db.append_recipe(ingredients, &suggestion).await?;

        Ok(suggestion)
    }
}
