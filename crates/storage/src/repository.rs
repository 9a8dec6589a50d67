use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::{DifficultyLevel, QuizDomain, SessionSummary, SummaryError};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A finished session, stamped and ready to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameResult {
    pub category: String,
    pub difficulty: DifficultyLevel,
    pub score: u32,
    pub total: u32,
    pub seconds_per_question: u32,
    pub created_at: DateTime<Utc>,
}

impl NewGameResult {
    #[must_use]
    pub fn from_summary(summary: &SessionSummary, created_at: DateTime<Utc>) -> Self {
        Self {
            category: summary.domain().category().to_owned(),
            difficulty: summary.difficulty(),
            score: summary.score(),
            total: summary.total(),
            seconds_per_question: summary.seconds_per_question(),
            created_at,
        }
    }
}

/// Stored game result, as read back from a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub id: i64,
    pub category: String,
    pub difficulty: DifficultyLevel,
    pub score: u32,
    pub total: u32,
    pub seconds_per_question: u32,
    pub created_at: DateTime<Utc>,
}

impl GameResult {
    #[must_use]
    pub fn from_new(id: i64, record: NewGameResult) -> Self {
        Self {
            id,
            category: record.category,
            difficulty: record.difficulty,
            score: record.score,
            total: record.total,
            seconds_per_question: record.seconds_per_question,
            created_at: record.created_at,
        }
    }

    /// Quiz domain for the stored category, if it is a known one.
    #[must_use]
    pub fn domain(&self) -> Option<QuizDomain> {
        QuizDomain::from_category(&self.category)
    }

    /// Rebuilds the session summary this result was stored from.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for an unknown category or an
    /// inconsistent score.
    pub fn to_summary(&self) -> Result<SessionSummary, StorageError> {
        let domain = self.domain().ok_or_else(|| {
            StorageError::Serialization(format!("unknown category: {}", self.category))
        })?;
        SessionSummary::new(
            domain,
            self.difficulty,
            self.score,
            self.total,
            self.seconds_per_question,
        )
        .map_err(|e: SummaryError| StorageError::Serialization(e.to_string()))
    }
}

/// Repository contract for finished game results.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Append a result and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be stored.
    async fn append_result(&self, result: &NewGameResult) -> Result<i64, StorageError>;

    /// Fetch a result by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError>;

    /// List the most recent results, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if results cannot be read.
    async fn recent_results(&self, limit: u32) -> Result<Vec<GameResult>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    results: Arc<Mutex<Vec<GameResult>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn append_result(&self, result: &NewGameResult) -> Result<i64, StorageError> {
        let mut guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = guard.last().map_or(1, |last| last.id + 1);
        guard.push(GameResult::from_new(id, result.clone()));
        Ok(id)
    }

    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn recent_results(&self, limit: u32) -> Result<Vec<GameResult>, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut out = guard.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(out)
    }
}

/// Result repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub results: Arc<dyn ResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let results: Arc<dyn ResultRepository> = Arc::new(InMemoryRepository::new());
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    fn record(domain: QuizDomain, score: u32, offset_secs: i64) -> NewGameResult {
        let summary = SessionSummary::new(domain, DifficultyLevel::Medium, score, 10, 60).unwrap();
        NewGameResult::from_summary(&summary, fixed_now() + Duration::seconds(offset_secs))
    }

    #[tokio::test]
    async fn appends_and_lists_newest_first() {
        let repo = InMemoryRepository::new();
        let first = repo.append_result(&record(QuizDomain::Math, 3, 0)).await.unwrap();
        let second = repo
            .append_result(&record(QuizDomain::Geography, 7, 60))
            .await
            .unwrap();
        assert_eq!((first, second), (1, 2));

        let recent = repo.recent_results(10).await.unwrap();
        assert_eq!(recent.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(recent[0].category, "Geography");

        let limited = repo.recent_results(1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, 2);
    }

    #[tokio::test]
    async fn stored_result_rebuilds_summary() {
        let repo = InMemoryRepository::new();
        let id = repo
            .append_result(&record(QuizDomain::GeneralKnowledge, 9, 0))
            .await
            .unwrap();
        let stored = repo.get_result(id).await.unwrap();
        let summary = stored.to_summary().unwrap();
        assert_eq!(summary.domain(), QuizDomain::GeneralKnowledge);
        assert_eq!(summary.score(), 9);
        assert_eq!(summary.total(), 10);

        assert!(matches!(
            repo.get_result(99).await,
            Err(StorageError::NotFound)
        ));
    }
}
