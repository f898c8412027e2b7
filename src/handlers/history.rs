// src/handlers/history.rs

use crate::{error::QuizError, store::ResultSink};

/// Past results formatted for display, most recent first.
///
/// `total` is the score denominator. Only the score is stored per result, so
/// every line uses the current question count; results taken under a
/// different `QUIZ_QUESTION_COUNT` are shown against the current one.
pub async fn past_results(sink: &dyn ResultSink, total: usize) -> Result<Vec<String>, QuizError> {
    let results = sink.list_results().await?;
    Ok(results.iter().map(|r| r.summary_line(total)).collect())
}
