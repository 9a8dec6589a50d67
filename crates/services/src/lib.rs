#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod results;
pub mod sessions;
pub mod sink;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::{QuizConfig, SessionConfig};
pub use error::{AppServicesError, ConfigError, ResultServiceError, ResultSinkError};
pub use results::{ResultRecorder, ResultService};
pub use sessions::{
    AnswerOutcome, QuestionSource, QuizSession, SessionCommand, SessionEvent, SessionHandle,
    SessionProgress, SessionRunner, SessionState,
};
pub use sink::{ChannelSink, MemorySink, ResultSink};
