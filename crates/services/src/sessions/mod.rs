mod progress;
mod runner;
mod service;
mod source;
mod state;

// Public API of the session subsystem.
pub use progress::SessionProgress;
pub use runner::{SessionCommand, SessionEvent, SessionHandle, SessionRunner};
pub use service::{AnswerOutcome, QuizSession};
pub use source::QuestionSource;
pub use state::SessionState;
