// src/handlers/import.rs

use std::path::Path;

use crate::{
    error::QuizError,
    store::{CsvFactProvider, FactProvider, SqliteStore},
};

/// Replaces the stored facts with the contents of a CSV file.
/// Returns the number of facts stored. Nothing is replaced if the file is unreadable.
pub async fn import_csv(store: &SqliteStore, path: &Path) -> Result<usize, QuizError> {
    let facts = CsvFactProvider::new(path).load_facts().await?;
    tracing::info!("Importing {} facts from {}", facts.len(), path.display());
    store.replace_facts(&facts).await
}

/// Imports `path` only when the fact table is empty. Returns the number imported.
pub async fn seed_if_empty(store: &SqliteStore, path: &Path) -> Result<usize, QuizError> {
    if store.fact_count().await? > 0 {
        tracing::debug!("Fact table already populated; skipping seed");
        return Ok(0);
    }
    import_csv(store, path).await
}
