use crate::db::connection::Database;
use crate::db::repository::{EmotionRepository, RecipeRepository, StudyRepository};
use crate::db::traits::{DatabaseBackend, EmotionStore, RecipeStore, StudyStore};
use crate::error::Result;
use crate::intelligence::ExtractedPayload;
use crate::models::{EmotionEntry, Fact, Flashcard, MoodRecord, Quiz, Recipe};
use async_trait::async_trait;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudyStore for LibSqlBackend {
    async fn append_study_material(
        &self,
        source_text: &str,
        payload: &ExtractedPayload,
    ) -> Result<()> {
        let conn = self.db.connect()?;
        StudyRepository::create_study_set(&conn, source_text, payload).await
    }
    async fn list_flashcards(&self) -> Result<Vec<Flashcard>> {
        let conn = self.db.connect()?;
        StudyRepository::list_flashcards(&conn).await
    }
    async fn list_quizzes(&self) -> Result<Vec<Quiz>> {
        let conn = self.db.connect()?;
        StudyRepository::list_quizzes(&conn).await
    }
    async fn list_facts(&self) -> Result<Vec<Fact>> {
        let conn = self.db.connect()?;
        StudyRepository::list_facts(&conn).await
    }
}

#[async_trait]
impl EmotionStore for LibSqlBackend {
    async fn append_emotion_entry(&self, entry: &EmotionEntry) -> Result<()> {
        let conn = self.db.connect()?;
        EmotionRepository::create(&conn, entry).await
    }
    async fn list_emotion_entries(&self) -> Result<Vec<EmotionEntry>> {
        let conn = self.db.connect()?;
        EmotionRepository::list(&conn).await
    }
    async fn list_mood_records(&self) -> Result<Vec<MoodRecord>> {
        let conn = self.db.connect()?;
        EmotionRepository::list_mood_records(&conn).await
    }
}

#[async_trait]
impl RecipeStore for LibSqlBackend {
    async fn append_recipe(&self, user_input: &str, suggestion: &str) -> Result<Recipe> {
        let conn = self.db.connect()?;
        RecipeRepository::create(&conn, user_input, suggestion).await
    }
    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let conn = self.db.connect()?;
        RecipeRepository::list(&conn).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn ping(&self) -> Result<()> {
        self.db.ping().await
    }

    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
