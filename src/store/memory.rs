// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    error::QuizError,
    models::{fact::Fact, quiz_result::QuizResult},
    store::{FactProvider, ResultSink},
};

/// In-memory fact provider and result sink, for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    facts: Vec<Fact>,
    results: Mutex<Vec<QuizResult>>,
    load_error: Option<String>,
    save_error: Option<String>,
}

impl MemoryStore {
    pub fn new(facts: Vec<Fact>) -> Self {
        Self {
            facts,
            ..Self::default()
        }
    }

    /// Every `load_facts` call fails with `LoadError(message)`.
    pub fn with_load_error(mut self, message: impl Into<String>) -> Self {
        self.load_error = Some(message.into());
        self
    }

    /// Every `save_result` call fails with `Storage(message)`.
    pub fn with_save_error(mut self, message: impl Into<String>) -> Self {
        self.save_error = Some(message.into());
        self
    }
}

#[async_trait]
impl FactProvider for MemoryStore {
    async fn load_facts(&self) -> Result<Vec<Fact>, QuizError> {
        match &self.load_error {
            Some(msg) => Err(QuizError::LoadError(msg.clone())),
            None => Ok(self.facts.clone()),
        }
    }
}

#[async_trait]
impl ResultSink for MemoryStore {
    async fn save_result(&self, taken_at: &str, score: i64) -> Result<(), QuizError> {
        if let Some(msg) = &self.save_error {
            tracing::error!("Failed to store quiz result: {}", msg);
            return Err(QuizError::Storage(msg.clone()));
        }
        self.results.lock().await.push(QuizResult::new(taken_at, score));
        Ok(())
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, QuizError> {
        // Newest insert first among equal timestamps, matching the SQLite ordering.
        let mut results: Vec<QuizResult> = self.results.lock().await.iter().rev().cloned().collect();
        results.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_results_sorted_descending() {
        let store = MemoryStore::default();
        store.save_result("2025-01-02 10:00", 3).await.unwrap();
        store.save_result("2025-01-03 09:00", 5).await.unwrap();
        store.save_result("2025-01-01 23:59", 6).await.unwrap();

        let stamps: Vec<String> = store
            .list_results()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.taken_at)
            .collect();
        assert_eq!(
            stamps,
            vec!["2025-01-03 09:00", "2025-01-02 10:00", "2025-01-01 23:59"]
        );
    }

    #[tokio::test]
    async fn test_injected_load_error() {
        let store = MemoryStore::default().with_load_error("disk on fire");
        let err = store.load_facts().await.unwrap_err();
        assert_eq!(err, QuizError::LoadError("disk on fire".to_string()));
    }
}
