// src/store/sqlite.rs

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{
    error::QuizError,
    models::{fact::Fact, quiz_result::QuizResult},
    store::{FactProvider, ResultSink},
};

/// Helper struct for reading rows of the 'facts' table.
#[derive(sqlx::FromRow)]
struct FactRow {
    entity: String,
    category: String,
}

/// SQLite-backed fact provider and result sink.
///
/// Owns the single connection pool of the process; clone the store (cheap, the
/// pool is reference counted) to share it between adapters.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, QuizError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to open database {}: {:?}", database_url, e);
                QuizError::from(e)
            })?;

        Ok(Self { pool })
    }

    /// Private in-memory database. A single connection that never expires,
    /// since every new SQLite memory connection starts out empty.
    pub async fn in_memory() -> Result<Self, QuizError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), QuizError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Replaces the whole fact table with `facts` in one transaction.
    pub async fn replace_facts(&self, facts: &[Fact]) -> Result<usize, QuizError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM facts").execute(&mut *tx).await?;

        for fact in facts {
            sqlx::query("INSERT INTO facts (entity, category) VALUES (?, ?)")
                .bind(fact.entity())
                .bind(fact.category())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert fact {}: {:?}", fact, e);
                    QuizError::from(e)
                })?;
        }

        tx.commit().await?;
        tracing::info!("Stored {} facts", facts.len());

        Ok(facts.len())
    }

    pub async fn fact_count(&self) -> Result<i64, QuizError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM facts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl FactProvider for SqliteStore {
    async fn load_facts(&self) -> Result<Vec<Fact>, QuizError> {
        let rows = sqlx::query_as::<_, FactRow>("SELECT entity, category FROM facts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch facts: {:?}", e);
                QuizError::LoadError(e.to_string())
            })?;

        rows.into_iter()
            .map(|row| {
                Fact::new(&row.entity, &row.category)
                    .map_err(|e| QuizError::LoadError(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl ResultSink for SqliteStore {
    async fn save_result(&self, taken_at: &str, score: i64) -> Result<(), QuizError> {
        sqlx::query("INSERT INTO quiz_results (taken_at, score) VALUES (?, ?)")
            .bind(taken_at)
            .bind(score)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to store quiz result: {:?}", e);
                QuizError::from(e)
            })?;
        Ok(())
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, QuizError> {
        let results = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT taken_at, score
            FROM quiz_results
            ORDER BY taken_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch quiz results: {:?}", e);
            QuizError::from(e)
        })?;

        Ok(results)
    }
}
