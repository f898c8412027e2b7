// src/store/mod.rs

use async_trait::async_trait;

use crate::{
    error::QuizError,
    models::{fact::Fact, quiz_result::QuizResult},
};

pub mod csv_source;
pub mod memory;
pub mod sqlite;

pub use csv_source::{CsvFactProvider, read_facts};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Supplies the pool of facts a quiz is drawn from.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn load_facts(&self) -> Result<Vec<Fact>, QuizError>;
}

/// Persists finished quizzes and lists past ones.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn save_result(&self, taken_at: &str, score: i64) -> Result<(), QuizError>;

    /// Past results, most recent first.
    async fn list_results(&self) -> Result<Vec<QuizResult>, QuizError>;
}
