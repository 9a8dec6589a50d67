use thiserror::Error;

use crate::model::{QuestionError, SummaryError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DifficultyLevel, QuestionSpec, QuizDomain, SessionSummary};

    fn build() -> Result<SessionSummary, Error> {
        QuestionSpec::choice("Pick", ["only"], 0)?;
        Ok(SessionSummary::new(QuizDomain::Math, DifficultyLevel::Easy, 0, 0, 30)?)
    }

    #[test]
    fn layer_errors_convert_into_crate_error() {
        assert!(matches!(
            build(),
            Err(Error::Question(QuestionError::TooFewOptions { len: 1 }))
        ));

        let summary: Result<SessionSummary, Error> =
            SessionSummary::new(QuizDomain::Math, DifficultyLevel::Easy, 3, 2, 30)
                .map_err(Error::from);
        assert!(matches!(
            summary,
            Err(Error::Summary(SummaryError::ScoreExceedsTotal { score: 3, total: 2 }))
        ));
    }
}
