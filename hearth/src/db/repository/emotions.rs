use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{EmotionEntry, MoodRecord};

use super::{format_timestamp, parse_timestamp};

pub struct EmotionRepository;

impl EmotionRepository {
    pub async fn create(conn: &Connection, entry: &EmotionEntry) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO emotion_entries (
                id, entry_text, score_positive, score_negative, label, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6
            )
            "#,
            params![
                entry.id.clone(),
                entry.entry_text.clone(),
                entry.score_positive,
                entry.score_negative,
                entry.label.clone(),
                format_timestamp(&entry.created_at),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn list(conn: &Connection) -> Result<Vec<EmotionEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, entry_text, score_positive, score_negative, label, created_at
                FROM emotion_entries
                ORDER BY created_at ASC, rowid ASC
                "#,
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(EmotionEntry {
                id: row.get(0)?,
                entry_text: row.get(1)?,
                score_positive: row.get(2)?,
                score_negative: row.get(3)?,
                label: row.get(4)?,
                created_at: parse_timestamp(&row.get::<String>(5)?)?,
            });
        }

        Ok(results)
    }

    /// Timestamp and scores only, oldest first. Rows sharing a timestamp keep insertion order.
    pub async fn list_mood_records(conn: &Connection) -> Result<Vec<MoodRecord>> {
        let mut rows = conn
            .query(
                r#"
                SELECT created_at, score_positive, score_negative
                FROM emotion_entries
                ORDER BY created_at ASC, rowid ASC
                "#,
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(MoodRecord {
                created_at: parse_timestamp(&row.get::<String>(0)?)?,
                positive: row.get(1)?,
                negative: row.get(2)?,
            });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;
    use chrono::{DateTime, TimeZone, Utc};

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

    fn entry(id: &str, created_at: DateTime<Utc>, positive: f64, negative: f64) -> EmotionEntry {
        EmotionEntry {
            id: id.to_string(),
            entry_text: format!("entry {id}"),
            score_positive: positive,
            score_negative: negative,
            label: "POSITIVE".to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_mood_records_are_ascending_by_timestamp() {
        let conn = setup_test_db().await;
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();

        EmotionRepository::create(&conn, &entry("b", later, 0.3, 0.7))
            .await
            .unwrap();
        EmotionRepository::create(&conn, &entry("a", earlier, 0.8, 0.2))
            .await
            .unwrap();

        let records = EmotionRepository::list_mood_records(&conn).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].created_at, earlier);
        assert_eq!(records[0].positive, 0.8);
        assert_eq!(records[1].created_at, later);
        assert_eq!(records[1].negative, 0.7);
    }

    #[tokio::test]
    async fn test_equal_timestamps_keep_insertion_order() {
        let conn = setup_test_db().await;
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        for (id, positive) in [("z", 0.1), ("a", 0.9), ("m", 0.5)] {
            EmotionRepository::create(&conn, &entry(id, at, positive, 1.0 - positive))
                .await
                .unwrap();
        }

        let ids: Vec<String> = EmotionRepository::list(&conn)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_empty_table_yields_no_records() {
        let conn = setup_test_db().await;
        assert!(EmotionRepository::list_mood_records(&conn)
            .await
            .unwrap()
            .is_empty());
    }
}
