use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager and the repositories built on its pool
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Unique violation: {0}")]
    UniqueViolation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => return DatabaseError::ForeignKeyViolation(message),
                ErrorKind::UniqueViolation => return DatabaseError::UniqueViolation(message),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return DatabaseError::ConstraintViolation(message)
                }
                _ if message.contains("FOREIGN KEY constraint failed") => {
                    return DatabaseError::ForeignKeyViolation(message)
                }
                _ => {}
            }
        }
        DatabaseError::Sqlx(err)
    }
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS author (
        author_id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name        VARCHAR(50) NOT NULL CHECK (length(trim(name)) > 0),
        affiliation VARCHAR(50) NOT NULL DEFAULT 'Sin afiliación'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS article (
        article_id     INTEGER PRIMARY KEY AUTOINCREMENT,
        title          VARCHAR(255) NOT NULL,
        content        TEXT NOT NULL,
        author_id      INTEGER NOT NULL REFERENCES author (author_id) ON DELETE CASCADE,
        published_date TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_article_author_id ON article (author_id)",
];

/// Process-scoped handle to the author/article store.
///
/// Opened once at startup and closed once at shutdown; request handlers
/// receive clones of it through application state.
#[derive(Clone, Debug)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Open the pool described by `config` and make sure both tables exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));

        // Every connection to an in-memory database sees its own empty database,
        // so keep exactly one connection alive for the lifetime of the pool.
        if Self::is_in_memory(&config.url) {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            pool_options = pool_options.max_connections(config.max_connections.max(1));
        }

        let pool = pool_options.connect_with(options).await?;
        let manager = Self { pool };
        manager.ensure_schema().await?;

        info!("Opened database pool for: {}", config.url);
        Ok(manager)
    }

    /// Private in-memory store, used by tests and throwaway runs.
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 5,
        })
        .await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the author/article tables if they are missing
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(DatabaseManager::is_in_memory("sqlite::memory:"));
        assert!(DatabaseManager::is_in_memory("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!DatabaseManager::is_in_memory("sqlite://authorship.db?mode=rwc"));
    }

    #[tokio::test]
    async fn in_memory_store_is_healthy() {
        let db = DatabaseManager::in_memory().await.unwrap();
        db.health_check().await.unwrap();
        // Bootstrapping twice must be harmless
        db.ensure_schema().await.unwrap();
    }
}
