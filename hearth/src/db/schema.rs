use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Study buddy: one flashcard per generated quiz, tagged with the notes it came from
        CREATE TABLE IF NOT EXISTS flashcards (
            id TEXT PRIMARY KEY,
            source_text TEXT NOT NULL,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_flashcards_created_at ON flashcards(created_at);

        CREATE TABLE IF NOT EXISTS quizzes (
            id TEXT PRIMARY KEY,
            question TEXT NOT NULL,
            correct_answer TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_quizzes_created_at ON quizzes(created_at);

        CREATE TABLE IF NOT EXISTS did_you_know (
            id TEXT PRIMARY KEY,
            fact TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_did_you_know_created_at ON did_you_know(created_at);

        -- Emotion tracker
        CREATE TABLE IF NOT EXISTS emotion_entries (
            id TEXT PRIMARY KEY,
            entry_text TEXT NOT NULL,
            score_positive REAL NOT NULL DEFAULT 0,
            score_negative REAL NOT NULL DEFAULT 0,
            label TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_emotion_entries_created_at ON emotion_entries(created_at);

        -- Recipe suggestions
        CREATE TABLE IF NOT EXISTS recipes (
            id TEXT PRIMARY KEY,
            user_input TEXT NOT NULL,
            suggestion TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at);
        "#,
    )
    .await?;

    Ok(())
}
