// src/models/question.rs

use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{error::QuizError, models::fact::Fact, utils::sampler::sample_distractors};

/// One multiple-choice quiz item.
///
/// The option list holds the correct category exactly once plus
/// `option_count - 1` distinct distractors, in random order. Only the user's
/// answer changes after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    fact: Fact,
    options: Vec<String>,
    user_answer: Option<String>,
}

impl Question {
    /// Builds a question about `fact`, drawing distractors from `all_categories`.
    ///
    /// The correct answer lands in each of the `option_count` slots with equal probability.
    pub fn create<R: Rng + ?Sized>(
        fact: Fact,
        all_categories: &BTreeSet<String>,
        option_count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if option_count == 0 {
            return Err(QuizError::InvalidSettings(
                "a question needs at least one option".to_string(),
            ));
        }

        let distractors =
            sample_distractors(fact.category(), all_categories, option_count - 1, rng)?;

        let mut options = Vec::with_capacity(option_count);
        options.push(fact.category().to_string());
        options.extend(distractors);
        options.shuffle(rng);

        Ok(Self {
            fact,
            options,
            user_answer: None,
        })
    }

    pub fn fact(&self) -> &Fact {
        &self.fact
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        self.fact.category()
    }

    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    /// Stores the user's answer, replacing any earlier one.
    /// The answer is not checked against the options.
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.user_answer = Some(answer.into());
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Exact, case-sensitive match against the correct category.
    /// Unanswered questions are never correct.
    pub fn is_correct(&self) -> bool {
        self.user_answer.as_deref() == Some(self.correct_answer())
    }
}
