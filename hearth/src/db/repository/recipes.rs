use chrono::Utc;
use libsql::{params, Connection};
use nanoid::nanoid;

use crate::error::Result;
use crate::models::Recipe;

use super::{format_timestamp, parse_timestamp};

pub struct RecipeRepository;

impl RecipeRepository {
    pub async fn create(conn: &Connection, user_input: &str, suggestion: &str) -> Result<Recipe> {
        let recipe = Recipe {
            id: nanoid!(),
            user_input: user_input.to_string(),
            suggestion: suggestion.to_string(),
            created_at: Utc::now(),
        };

        conn.execute(
            r#"
            INSERT INTO recipes (id, user_input, suggestion, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                recipe.id.clone(),
                recipe.user_input.clone(),
                recipe.suggestion.clone(),
                format_timestamp(&recipe.created_at),
            ],
        )
        .await?;

        Ok(recipe)
    }

    pub async fn list(conn: &Connection) -> Result<Vec<Recipe>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, user_input, suggestion, created_at
                FROM recipes
                ORDER BY created_at ASC, rowid ASC
                "#,
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Recipe {
                id: row.get(0)?,
                user_input: row.get(1)?,
                suggestion: row.get(2)?,
                created_at: parse_timestamp(&row.get::<String>(3)?)?,
            });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;

    #[tokio::test]
    async fn test_create_and_list() {
        let conn = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap()
            .connect()
            .unwrap();
        init_schema(&conn).await.unwrap();

        let created = RecipeRepository::create(&conn, "beans, maize", "Githeri with avocado")
            .await
            .unwrap();

        let recipes = RecipeRepository::list(&conn).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, created.id);
        assert_eq!(recipes[0].user_input, "beans, maize");
        assert_eq!(recipes[0].suggestion, "Githeri with avocado");
    }
}
