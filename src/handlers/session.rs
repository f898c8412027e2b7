// src/handlers/session.rs

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    error::QuizError,
    models::quiz::{AnswerReview, Quiz, QuizSettings},
    state::AppState,
    store::{FactProvider, ResultSink},
    utils::timestamp,
};

/// Outcome of finishing a session.
#[derive(Debug)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub review: Vec<AnswerReview>,
    /// Background save of the result; `None` when it was already dispatched
    /// by an earlier `finish` call.
    pub save: Option<JoinHandle<()>>,
}

/// One run of the quiz from fact loading to the result screen.
///
/// Owns the quiz, the "result already stored" guard, and a liveness token.
/// Closing (or dropping) the session cancels the token; pending background
/// work checks it and turns into a no-op.
pub struct QuizSession {
    facts: Arc<dyn FactProvider>,
    results: Arc<dyn ResultSink>,
    settings: QuizSettings,
    quiz: Option<Quiz>,
    result_stored: bool,
    liveness: CancellationToken,
}

impl QuizSession {
    pub fn new(state: &AppState) -> Self {
        Self::with_settings(state, state.config.settings())
    }

    pub fn with_settings(state: &AppState, settings: QuizSettings) -> Self {
        Self {
            facts: Arc::clone(&state.facts),
            results: Arc::clone(&state.results),
            settings,
            quiz: None,
            result_stored: false,
            liveness: CancellationToken::new(),
        }
    }

    /// Token cancelled when the session closes.
    pub fn liveness(&self) -> CancellationToken {
        self.liveness.clone()
    }

    pub fn is_alive(&self) -> bool {
        !self.liveness.is_cancelled()
    }

    /// Loads the fact pool and builds the quiz.
    ///
    /// Calling it again returns the quiz already built without reloading.
    /// Fails with `Cancelled` if the session is closed before the load completes.
    pub async fn start(&mut self) -> Result<&Quiz, QuizError> {
        if self.quiz.is_none() {
            let liveness = self.liveness.clone();
            let pool = tokio::select! {
                biased;
                _ = liveness.cancelled() => {
                    tracing::debug!("Session closed while loading facts");
                    return Err(QuizError::Cancelled);
                }
                loaded = self.facts.load_facts() => loaded?,
            };

            let mut rng = match self.settings.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let quiz = Quiz::with_settings(&pool, &self.settings, &mut rng).map_err(|e| {
                tracing::warn!("Cannot start quiz: {}", e);
                e
            })?;

            tracing::info!(
                "Quiz started: {} questions from a pool of {} facts",
                quiz.len(),
                pool.len()
            );
            self.quiz = Some(quiz);
        }

        self.quiz.as_ref().ok_or(QuizError::NotStarted)
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn record_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<(), QuizError> {
        self.quiz
            .as_mut()
            .ok_or(QuizError::NotStarted)?
            .record_answer(index, answer)
    }

    pub fn is_result_stored(&self) -> bool {
        self.result_stored
    }

    /// Scores the quiz and, the first time only, saves the result in the background.
    ///
    /// A failed save is logged and does not affect the returned score.
    /// Must be called from within a Tokio runtime.
    pub fn finish(&mut self) -> Result<QuizSummary, QuizError> {
        let quiz = self.quiz.as_ref().ok_or(QuizError::NotStarted)?;
        let score = quiz.current_score();
        let total = quiz.len();
        let review = quiz.review();

        let save = if self.result_stored {
            None
        } else {
            self.result_stored = true;
            Some(self.dispatch_save(timestamp::now(), score as i64))
        };

        Ok(QuizSummary {
            score,
            total,
            review,
            save,
        })
    }

    /// Cancels pending background work for this session.
    pub fn close(&self) {
        self.liveness.cancel();
    }

    fn dispatch_save(&self, taken_at: String, score: i64) -> JoinHandle<()> {
        let sink = Arc::clone(&self.results);
        let liveness = self.liveness.clone();

        tokio::spawn(async move {
            if liveness.is_cancelled() {
                tracing::debug!("Session closed before result could be saved; skipping");
                return;
            }

            let saved = sink.save_result(&taken_at, score).await;

            match saved {
                Err(e) => tracing::warn!("Failed to save quiz result ({}): {}", taken_at, e),
                Ok(()) if liveness.is_cancelled() => {
                    tracing::debug!("Result saved after session closed")
                }
                Ok(()) => tracing::info!("Quiz result saved: {} at {}", score, taken_at),
            }
        })
    }
}

impl Drop for QuizSession {
    fn drop(&mut self) {
        self.liveness.cancel();
    }
}
