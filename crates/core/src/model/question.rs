use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("multiple-choice question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// How a question is answered and what counts as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuestionKind {
    /// Free-text integer answer.
    Numeric { correct_value: i64 },
    /// Pick one option out of an ordered list.
    Choice {
        options: Vec<String>,
        correct_index: usize,
    },
}

/// A single question, as produced by the generator or drawn from a bank.
///
/// Fields are private so a question cannot change once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    prompt: String,
    kind: QuestionKind,
}

impl QuestionSpec {
    /// Builds a numeric question.
    #[must_use]
    pub fn numeric(prompt: impl Into<String>, correct_value: i64) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::Numeric { correct_value },
        }
    }

    /// Builds a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::CorrectIndexOutOfRange` if the index does not point at an option.
    pub fn choice<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt,
            kind: QuestionKind::Choice {
                options,
                correct_index,
            },
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Options for a multiple-choice question, empty for numeric ones.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Choice { options, .. } => options,
            QuestionKind::Numeric { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::Choice { .. })
    }

    /// Checks an answer against this question.
    ///
    /// Unparsable or missing input is simply wrong.
    #[must_use]
    pub fn is_correct(&self, answer: &Answer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::Numeric { correct_value }, Answer::Text(raw)) => {
                parse_strict_integer(raw) == Some(*correct_value)
            }
            (QuestionKind::Choice { correct_index, .. }, Answer::Selected(index)) => {
                index == correct_index
            }
            (QuestionKind::Choice { correct_index, .. }, Answer::Text(raw)) => {
                parse_strict_integer(raw)
                    .and_then(|value| usize::try_from(value).ok())
                    .is_some_and(|index| index == *correct_index)
            }
            (QuestionKind::Numeric { .. }, Answer::Selected(_)) | (_, Answer::Blank) => false,
        }
    }

    /// Text of the correct answer, for feedback after evaluation.
    #[must_use]
    pub fn correct_answer_text(&self) -> String {
        match &self.kind {
            QuestionKind::Numeric { correct_value } => correct_value.to_string(),
            QuestionKind::Choice {
                options,
                correct_index,
            } => options.get(*correct_index).cloned().unwrap_or_default(),
        }
    }
}

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// Caller input for the active question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Answer {
    /// Raw typed text.
    Text(String),
    /// Zero-based index of a picked option.
    Selected(usize),
    /// Nothing entered or selected.
    #[default]
    Blank,
}

impl Answer {
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }
}

/// Accepts an optional leading `-` followed by ASCII digits, after trimming.
fn parse_strict_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
