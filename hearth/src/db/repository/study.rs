use chrono::Utc;
use libsql::{params, Connection};
use nanoid::nanoid;

use crate::error::Result;
use crate::intelligence::{ExtractedPayload, QuizItem};
use crate::models::{Fact, Flashcard, Quiz};

use super::{format_timestamp, parse_timestamp};

pub struct StudyRepository;

impl StudyRepository {
    /// Writes flashcards, then facts, then quizzes in one transaction.
    /// A failure part way leaves all three tables untouched.
    pub async fn create_study_set(
        conn: &Connection,
        source_text: &str,
        payload: &ExtractedPayload,
    ) -> Result<()> {
        let tx = conn.transaction().await?;

        let written = async {
            insert_flashcards(&tx, source_text, &payload.quizzes).await?;
            insert_facts(&tx, &payload.facts).await?;
            insert_quizzes(&tx, &payload.quizzes).await
        }
        .await;

        if let Err(error) = written {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(error = %rollback_error, "Failed to roll back study set");
            }
            return Err(error);
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn list_flashcards(conn: &Connection) -> Result<Vec<Flashcard>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, source_text, question, answer, created_at
                FROM flashcards
                ORDER BY created_at ASC, rowid ASC
                "#,
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Flashcard {
                id: row.get(0)?,
                source_text: row.get(1)?,
                question: row.get(2)?,
                answer: row.get(3)?,
                created_at: parse_timestamp(&row.get::<String>(4)?)?,
            });
        }

        Ok(results)
    }

    pub async fn list_quizzes(conn: &Connection) -> Result<Vec<Quiz>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, question, correct_answer, created_at
                FROM quizzes
                ORDER BY created_at ASC, rowid ASC
                "#,
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Quiz {
                id: row.get(0)?,
                question: row.get(1)?,
                correct_answer: row.get(2)?,
                created_at: parse_timestamp(&row.get::<String>(3)?)?,
            });
        }

        Ok(results)
    }

    pub async fn list_facts(conn: &Connection) -> Result<Vec<Fact>> {
        let mut rows = conn
            .query(
                "SELECT id, fact, created_at FROM did_you_know ORDER BY created_at ASC, rowid ASC",
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Fact {
                id: row.get(0)?,
                fact: row.get(1)?,
                created_at: parse_timestamp(&row.get::<String>(2)?)?,
            });
        }

        Ok(results)
    }
}

async fn insert_flashcards(
    conn: &Connection,
    source_text: &str,
    quizzes: &[QuizItem],
) -> Result<()> {
    for quiz in quizzes {
        let card = Flashcard {
            id: nanoid!(),
            source_text: source_text.to_string(),
            question: quiz.question.clone(),
            answer: quiz.answer.clone(),
            created_at: Utc::now(),
        };

        conn.execute(
            r#"
            INSERT INTO flashcards (id, source_text, question, answer, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                card.id,
                card.source_text,
                card.question,
                card.answer,
                format_timestamp(&card.created_at),
            ],
        )
        .await?;
    }
    Ok(())
}

async fn insert_facts(conn: &Connection, facts: &[String]) -> Result<()> {
    for text in facts {
        let fact = Fact {
            id: nanoid!(),
            fact: text.clone(),
            created_at: Utc::now(),
        };

        conn.execute(
            "INSERT INTO did_you_know (id, fact, created_at) VALUES (?1, ?2, ?3)",
            params![fact.id, fact.fact, format_timestamp(&fact.created_at)],
        )
        .await?;
    }
    Ok(())
}

async fn insert_quizzes(conn: &Connection, quizzes: &[QuizItem]) -> Result<()> {
    for item in quizzes {
        let quiz = Quiz {
            id: nanoid!(),
            question: item.question.clone(),
            correct_answer: item.answer.clone(),
            created_at: Utc::now(),
        };

        conn.execute(
            r#"
            INSERT INTO quizzes (id, question, correct_answer, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                quiz.id,
                quiz.question,
                quiz.correct_answer,
                format_timestamp(&quiz.created_at),
            ],
        )
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;

    async fn setup_test_db() -> Connection {
        let conn = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap()
            .connect()
            .unwrap();

        init_schema(&conn).await.unwrap();
        conn
    }

    fn quiz(question: &str, answer: &str) -> QuizItem {
        QuizItem {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn payload(quizzes: Vec<QuizItem>, facts: &[&str]) -> ExtractedPayload {
        ExtractedPayload {
            quizzes,
            facts: facts.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_flashcards_keep_source_and_order() {
        let conn = setup_test_db().await;

        StudyRepository::create_study_set(
            &conn,
            "Photosynthesis notes",
            &payload(
                vec![quiz("What gas is absorbed?", "CO2"), quiz("Where?", "Leaves")],
                &[],
            ),
        )
        .await
        .unwrap();

        let cards = StudyRepository::list_flashcards(&conn).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What gas is absorbed?");
        assert_eq!(cards[1].answer, "Leaves");
        assert!(cards.iter().all(|c| c.source_text == "Photosynthesis notes"));
    }

    #[tokio::test]
    async fn test_quizzes_store_answer_as_correct_answer() {
        let conn = setup_test_db().await;

        StudyRepository::create_study_set(&conn, "Sums", &payload(vec![quiz("2 + 2?", "4")], &[]))
            .await
            .unwrap();
        let listed = StudyRepository::list_quizzes(&conn).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].question, "2 + 2?");
        assert_eq!(listed[0].correct_answer, "4");
    }

    #[tokio::test]
    async fn test_facts_round_trip() {
        let conn = setup_test_db().await;

        StudyRepository::create_study_set(
            &conn,
            "Kenya",
            &payload(
                vec![],
                &["Mount Kenya is an extinct volcano", "Tea grows in Kericho"],
            ),
        )
        .await
        .unwrap();

        let facts = StudyRepository::list_facts(&conn).await.unwrap();
        let texts: Vec<&str> = facts.iter().map(|f| f.fact.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Mount Kenya is an extinct volcano", "Tea grows in Kericho"]
        );
        assert!(StudyRepository::list_flashcards(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_set_writes_nothing() {
        let conn = setup_test_db().await;

        StudyRepository::create_study_set(&conn, "notes", &ExtractedPayload::default())
            .await
            .unwrap();

        assert!(StudyRepository::list_flashcards(&conn).await.unwrap().is_empty());
        assert!(StudyRepository::list_quizzes(&conn).await.unwrap().is_empty());
        assert!(StudyRepository::list_facts(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_quiz_insert_rolls_back_whole_set() {
        let conn = setup_test_db().await;
        conn.execute("DROP TABLE quizzes", ()).await.unwrap();

        let result = StudyRepository::create_study_set(
            &conn,
            "Photosynthesis notes",
            &payload(vec![quiz("What gas is absorbed?", "CO2")], &["Leaves are green"]),
        )
        .await;

        assert!(result.is_err());
        assert!(StudyRepository::list_flashcards(&conn).await.unwrap().is_empty());
        assert!(StudyRepository::list_facts(&conn).await.unwrap().is_empty());
    }
}
