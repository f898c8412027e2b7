// src/models/quiz_result.rs

use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'quiz_results' table in the database.
/// One row per finished quiz; rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct QuizResult {
    /// Local time the quiz was finished, formatted `YYYY-MM-DD HH:MM`.
    pub taken_at: String,
    pub score: i64,
}

impl QuizResult {
    pub fn new(taken_at: impl Into<String>, score: i64) -> Self {
        Self {
            taken_at: taken_at.into(),
            score,
        }
    }

    /// Formats the result for the history list, e.g. `2025-03-01 14:05 - Score: 4/6`.
    pub fn summary_line(&self, total: usize) -> String {
        format!("{} - Score: {}/{}", self.taken_at, self.score, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let result = QuizResult::new("2025-03-01 14:05", 4);
        assert_eq!(result.summary_line(6), "2025-03-01 14:05 - Score: 4/6");
    }
}
