use serde::Serialize;
use thiserror::Error;

use crate::model::{DifficultyLevel, QuizDomain};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score ({score}) cannot exceed total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

/// Final tally of a finished quiz session.
///
/// Built once when the session finishes and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    domain: QuizDomain,
    difficulty: DifficultyLevel,
    score: u32,
    total: u32,
    seconds_per_question: u32,
}

impl SessionSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(
        domain: QuizDomain,
        difficulty: DifficultyLevel,
        score: u32,
        total: u32,
        seconds_per_question: u32,
    ) -> Result<Self, SummaryError> {
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            domain,
            difficulty,
            score,
            total,
            seconds_per_question,
        })
    }

    /// Builds a summary from a session's question count.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::TooManyQuestions` if the count does not fit in `u32`,
    /// or `SummaryError::ScoreExceedsTotal` if the score is inconsistent.
    pub fn from_session(
        domain: QuizDomain,
        difficulty: DifficultyLevel,
        score: u32,
        question_count: usize,
    ) -> Result<Self, SummaryError> {
        let total = u32::try_from(question_count)
            .map_err(|_| SummaryError::TooManyQuestions { len: question_count })?;
        Self::new(
            domain,
            difficulty,
            score,
            total,
            difficulty.seconds_per_question(),
        )
    }

    #[must_use]
    pub fn domain(&self) -> QuizDomain {
        self.domain
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }
}
