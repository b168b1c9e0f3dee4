use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

/// Where `DATABASE_URL` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location<'a> {
    Remote { url: &'a str },
    Replica { url: &'a str, local_path: &'a str },
    Local { path: &'a str },
}

impl<'a> Location<'a> {
    fn resolve(config: &'a DatabaseConfig) -> Self {
        let url = config.url.as_str();
        if url.starts_with("libsql://") || url.starts_with("https://") {
            return match config.local_path.as_deref() {
                Some(local_path) => Location::Replica { url, local_path },
                None => Location::Remote { url },
            };
        }

        Location::Local {
            path: url.strip_prefix("file:").unwrap_or(url),
        }
    }
}

/// Shared handle to the hearth database. Cloning is cheap.
#[derive(Clone)]
pub struct Database {
    db: Arc<libsql::Database>,
    replica: bool,
}

impl Database {
    /// Opens the database, applies the connection pragmas and creates the schema.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let auth_token = config.auth_token.clone().unwrap_or_default();
        let location = Location::resolve(config);

        let db = match location {
            Location::Remote { url } => {
                Builder::new_remote(url.to_string(), auth_token)
                    .build()
                    .await?
            }
            Location::Replica { url, local_path } => {
                Builder::new_remote_replica(local_path, url.to_string(), auth_token)
                    .build()
                    .await?
            }
            Location::Local { path } => Builder::new_local(path).build().await?,
        };

        let database = Self {
            db: Arc::new(db),
            replica: matches!(location, Location::Replica { .. }),
        };

        let conn = database.connect()?;
        if !matches!(location, Location::Remote { .. }) {
            apply_pragmas(&conn, config).await;
        }
        schema::init_schema(&conn).await?;

        tracing::info!(url = %config.url, replica = database.replica, "Database ready");
        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    /// Round-trips a trivial query.
    pub async fn ping(&self) -> Result<()> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT 1", ()).await?;
        rows.next().await?;
        Ok(())
    }

    /// Pulls remote frames into the local replica. A no-op for other locations.
    pub async fn sync(&self) -> Result<()> {
        if !self.replica {
            return Ok(());
        }

        let replicated = self.db.sync().await?;
        tracing::info!(?replicated, "Database replica synced");
        Ok(())
    }
}

async fn apply_pragmas(conn: &Connection, config: &DatabaseConfig) {
    let busy_timeout = format!("PRAGMA busy_timeout = {}", config.busy_timeout_ms);
    if let Err(error) = conn.execute_batch(&busy_timeout).await {
        tracing::warn!(
            busy_timeout_ms = config.busy_timeout_ms,
            error = %error,
            "Failed to set SQLite busy_timeout"
        );
    }

    let journal_mode = format!("PRAGMA journal_mode = {}", config.journal_mode.as_pragma());
    if let Err(error) = conn.execute_batch(&journal_mode).await {
        tracing::warn!(
            mode = config.journal_mode.as_pragma(),
            error = %error,
            "Failed to set SQLite journal_mode"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalMode;

    fn local_config(dir: &tempfile::TempDir) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("file:{}", dir.path().join("hearth.db").display()),
            ..DatabaseConfig::default()
        }
    }

    async fn journal_mode(conn: &Connection) -> String {
        let mut rows = conn.query("PRAGMA journal_mode", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        row.get::<String>(0).unwrap().to_lowercase()
    }

    #[test]
    fn test_location_resolution() {
        let config = DatabaseConfig {
            url: "file:data/hearth.db".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            Location::resolve(&config),
            Location::Local {
                path: "data/hearth.db"
            }
        );

        let config = DatabaseConfig::default();
        assert_eq!(Location::resolve(&config), Location::Local { path: ":memory:" });

        let config = DatabaseConfig {
            url: "libsql://hearth.example.io".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            Location::resolve(&config),
            Location::Remote {
                url: "libsql://hearth.example.io"
            }
        );

        let config = DatabaseConfig {
            url: "https://hearth.example.io".to_string(),
            local_path: Some("replica.db".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            Location::resolve(&config),
            Location::Replica {
                url: "https://hearth.example.io",
                local_path: "replica.db"
            }
        );
    }

    #[test]
    fn test_local_path_is_ignored_for_local_urls() {
        let config = DatabaseConfig {
            url: "hearth.db".to_string(),
            local_path: Some("replica.db".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(Location::resolve(&config), Location::Local { path: "hearth.db" });
    }

    #[tokio::test]
    async fn test_configured_journal_mode_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            busy_timeout_ms: 1234,
            journal_mode: JournalMode::Delete,
            ..local_config(&dir)
        };

        let db = Database::new(&config).await.unwrap();
        let conn = db.connect().unwrap();

        assert_eq!(journal_mode(&conn).await, "delete");
    }

    #[tokio::test]
    async fn test_default_journal_mode_is_wal() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&local_config(&dir)).await.unwrap();
        let conn = db.connect().unwrap();
        assert_eq!(journal_mode(&conn).await, "wal");
    }

    #[tokio::test]
    async fn test_ping_and_local_sync() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&local_config(&dir)).await.unwrap();

        db.ping().await.unwrap();
        db.sync().await.unwrap();
    }
}
