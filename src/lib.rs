// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod utils;

// Re-export specific items for convenience
pub use error::QuizError;
pub use handlers::session::{QuizSession, QuizSummary};
pub use models::{fact::Fact, question::Question, quiz::Quiz, quiz_result::QuizResult};
