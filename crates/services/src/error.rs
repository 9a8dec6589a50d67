//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ParseDomainError, QuestionError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors returned by a `ResultSink` when a summary cannot be delivered.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultSinkError {
    #[error("result channel is closed")]
    Closed,
    #[error("result sink is unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `ResultService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while loading configuration or an extra question corpus.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("corpus entry {index}: {source}")]
    Domain {
        index: usize,
        #[source]
        source: ParseDomainError,
    },
    #[error("corpus entry {index}: maths questions are generated and cannot be banked")]
    ProceduralDomain { index: usize },
    #[error("corpus entry {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
