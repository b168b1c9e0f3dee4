use async_trait::async_trait;

use crate::error::Result;
use crate::intelligence::ExtractedPayload;
use crate::models::{EmotionEntry, Fact, Flashcard, MoodRecord, Quiz, Recipe};

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// Append-only storage for study buddy output.
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// Flashcards, facts and quizzes for one set of notes, written atomically.
    async fn append_study_material(
        &self,
        source_text: &str,
        payload: &ExtractedPayload,
    ) -> Result<()>;
    async fn list_flashcards(&self) -> Result<Vec<Flashcard>>;
    async fn list_quizzes(&self) -> Result<Vec<Quiz>>;
    async fn list_facts(&self) -> Result<Vec<Fact>>;
}

/// Append-only storage for scored journal entries.
#[async_trait]
pub trait EmotionStore: Send + Sync {
    async fn append_emotion_entry(&self, entry: &EmotionEntry) -> Result<()>;
    async fn list_emotion_entries(&self) -> Result<Vec<EmotionEntry>>;
    /// Oldest first.
    async fn list_mood_records(&self) -> Result<Vec<MoodRecord>>;
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn append_recipe(&self, user_input: &str, suggestion: &str) -> Result<Recipe>;
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete database backend that combines all store traits plus lifecycle
/// operations.
#[async_trait]
pub trait DatabaseBackend: StudyStore + EmotionStore + RecipeStore {
    /// Cheap liveness check used by the health endpoint.
    async fn ping(&self) -> Result<()>;

    /// Pull from the remote primary. No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}
