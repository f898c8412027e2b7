// src/error.rs

use std::fmt;

/// Crate-wide error enum.
/// Covers quiz construction failures, fact loading, and storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    // Fewer facts in the pool than questions requested
    InsufficientData { required: usize, available: usize },

    // Fewer distinct categories than options per question
    InsufficientCategories { required: usize, available: usize },

    // The fact provider could not deliver a pool
    LoadError(String),

    // A fact with a blank entity or category
    InvalidFact(String),

    // Question/option counts that cannot produce a quiz
    InvalidSettings(String),

    QuestionOutOfRange { index: usize, len: usize },

    // Session operation before the quiz was built
    NotStarted,

    // The owning session was closed while an operation was pending
    Cancelled,

    // Result sink / database failure
    Storage(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "not enough facts: {} required, {} available",
                required, available
            ),
            QuizError::InsufficientCategories {
                required,
                available,
            } => write!(
                f,
                "not enough distinct categories: {} required, {} available",
                required, available
            ),
            QuizError::LoadError(msg) => write!(f, "failed to load facts: {}", msg),
            QuizError::InvalidFact(msg) => write!(f, "invalid fact: {}", msg),
            QuizError::InvalidSettings(msg) => write!(f, "invalid quiz settings: {}", msg),
            QuizError::QuestionOutOfRange { index, len } => write!(
                f,
                "question index {} out of range (quiz has {} questions)",
                index, len
            ),
            QuizError::NotStarted => write!(f, "quiz session has not been started"),
            QuizError::Cancelled => write!(f, "quiz session was closed"),
            QuizError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {}

/// Converts `sqlx::Error` into `QuizError::Storage`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for QuizError {
    fn from(err: sqlx::Error) -> Self {
        QuizError::Storage(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for QuizError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        QuizError::Storage(err.to_string())
    }
}

impl From<csv::Error> for QuizError {
    fn from(err: csv::Error) -> Self {
        QuizError::LoadError(err.to_string())
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::LoadError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_insufficient_data() {
        let err = QuizError::InsufficientData {
            required: 6,
            available: 4,
        };
        assert_eq!(err.to_string(), "not enough facts: 6 required, 4 available");
    }

    #[test]
    fn test_io_error_becomes_load_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "country_continent.csv");
        let err: QuizError = io.into();
        assert!(matches!(err, QuizError::LoadError(msg) if msg.contains("country_continent.csv")));
    }
}
