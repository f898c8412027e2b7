// src/models/quiz.rs

use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{
    config::{DEFAULT_OPTION_COUNT, DEFAULT_QUESTION_COUNT},
    error::QuizError,
    models::{fact::Fact, question::Question},
};

/// Shape of a quiz: how many questions, how many options each, and an
/// optional seed for reproducible draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSettings {
    pub question_count: usize,
    pub option_count: usize,
    pub rng_seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            option_count: DEFAULT_OPTION_COUNT,
            rng_seed: None,
        }
    }
}

/// Per-question line of the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    pub entity: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// An ordered set of questions drawn without replacement from a fact pool.
///
/// The question list is fixed at construction; only answers change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Builds a quiz of `question_count` questions with `option_count` options each.
    ///
    /// * Distractors come from the categories of the **whole** pool, not just the
    ///   sampled facts.
    /// * The pool is copied before shuffling; the caller's slice is untouched.
    ///
    /// Fails with `InsufficientData` when the pool is smaller than `question_count`
    /// and `InsufficientCategories` when it has fewer than `option_count` categories.
    pub fn create<R: Rng + ?Sized>(
        pool: &[Fact],
        question_count: usize,
        option_count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if option_count == 0 {
            return Err(QuizError::InvalidSettings(
                "option count must be at least 1".to_string(),
            ));
        }

        if pool.len() < question_count {
            return Err(QuizError::InsufficientData {
                required: question_count,
                available: pool.len(),
            });
        }

        let all_categories: BTreeSet<String> =
            pool.iter().map(|f| f.category().to_string()).collect();

        if all_categories.len() < option_count {
            return Err(QuizError::InsufficientCategories {
                required: option_count,
                available: all_categories.len(),
            });
        }

        let mut drawn: Vec<&Fact> = pool.iter().collect();
        drawn.shuffle(rng);
        drawn.truncate(question_count);

        let questions = drawn
            .into_iter()
            .map(|fact| Question::create(fact.clone(), &all_categories, option_count, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Built quiz: {} questions, {} options, {} facts / {} categories in pool",
            questions.len(),
            option_count,
            pool.len(),
            all_categories.len()
        );

        Ok(Self { questions })
    }

    pub fn with_settings<R: Rng + ?Sized>(
        pool: &[Fact],
        settings: &QuizSettings,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        Self::create(pool, settings.question_count, settings.option_count, rng)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Records an answer for the question at `index`. Later calls overwrite.
    pub fn record_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<(), QuizError> {
        let len = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index, len })?;
        question.record_answer(answer);
        Ok(())
    }

    /// Number of correctly answered questions. Recomputed on every call.
    pub fn current_score(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    pub fn is_fully_answered(&self) -> bool {
        self.questions.iter().all(Question::is_answered)
    }

    pub fn review(&self) -> Vec<AnswerReview> {
        self.questions
            .iter()
            .map(|q| AnswerReview {
                entity: q.fact().entity().to_string(),
                user_answer: q.user_answer().map(str::to_string),
                correct_answer: q.correct_answer().to_string(),
                is_correct: q.is_correct(),
            })
            .collect()
    }
}
