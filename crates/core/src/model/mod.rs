mod difficulty;
mod domain;
mod question;
mod summary;

pub use difficulty::DifficultyLevel;
pub use domain::{ParseDomainError, QuestionOrigin, QuizDomain};
pub use question::{Answer, QuestionError, QuestionKind, QuestionSpec};
pub use summary::{SessionSummary, SummaryError};
