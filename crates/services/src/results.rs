use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::SessionSummary;
use storage::repository::{GameResult, NewGameResult, ResultRepository};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::ResultServiceError;
use crate::sink::ChannelSink;

/// Stores finished sessions and lists past results.
#[derive(Clone)]
pub struct ResultService {
    clock: Clock,
    results: Arc<dyn ResultRepository>,
}

impl ResultService {
    #[must_use]
    pub fn new(clock: Clock, results: Arc<dyn ResultRepository>) -> Self {
        Self { clock, results }
    }

    /// Stamps `summary` with the current time and appends it.
    ///
    /// # Errors
    ///
    /// Returns `ResultServiceError::Storage` if the repository rejects it.
    pub async fn record(&self, summary: &SessionSummary) -> Result<i64, ResultServiceError> {
        let record = NewGameResult::from_summary(summary, self.clock.now());
        let id = self.results.append_result(&record).await?;
        Ok(id)
    }

    /// Most recent results, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ResultServiceError::Storage` on repository failures.
    pub async fn recent(&self, limit: u32) -> Result<Vec<GameResult>, ResultServiceError> {
        Ok(self.results.recent_results(limit).await?)
    }
}

/// Background task persisting summaries delivered through a `ChannelSink`.
pub struct ResultRecorder {
    service: Arc<ResultService>,
    rx: mpsc::UnboundedReceiver<SessionSummary>,
}

impl ResultRecorder {
    #[must_use]
    pub fn new(service: Arc<ResultService>, rx: mpsc::UnboundedReceiver<SessionSummary>) -> Self {
        Self { service, rx }
    }

    /// Creates a sink and spawns the recorder draining it.
    ///
    /// The task ends once every clone of the sink is dropped and returns the
    /// number of results stored.
    #[must_use]
    pub fn spawn(service: Arc<ResultService>) -> (ChannelSink, JoinHandle<usize>) {
        let (sink, rx) = ChannelSink::channel();
        let handle = tokio::spawn(Self::new(service, rx).run());
        (sink, handle)
    }

    pub async fn run(mut self) -> usize {
        let mut stored = 0;
        while let Some(summary) = self.rx.recv().await {
            match self.service.record(&summary).await {
                Ok(id) => {
                    stored += 1;
                    debug!(
                        id,
                        domain = %summary.domain(),
                        score = summary.score(),
                        total = summary.total(),
                        "result stored"
                    );
                }
                Err(err) => warn!(error = %err, "failed to store result"),
            }
        }
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::{DifficultyLevel, QuizDomain};
    use quiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryRepository, StorageError};

    use crate::sink::ResultSink;

    fn summary(domain: QuizDomain, score: u32) -> SessionSummary {
        SessionSummary::from_session(domain, DifficultyLevel::Medium, score, 5).unwrap()
    }

    struct BrokenRepository;

    #[async_trait::async_trait]
    impl ResultRepository for BrokenRepository {
        async fn append_result(&self, _result: &NewGameResult) -> Result<i64, StorageError> {
            Err(StorageError::Connection("disk full".into()))
        }

        async fn get_result(&self, _id: i64) -> Result<GameResult, StorageError> {
            Err(StorageError::NotFound)
        }

        async fn recent_results(&self, _limit: u32) -> Result<Vec<GameResult>, StorageError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn record_stamps_with_clock() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = ResultService::new(fixed_clock(), repo.clone());

        let id = service.record(&summary(QuizDomain::Geography, 4)).await.unwrap();
        let stored = repo.get_result(id).await.unwrap();
        assert_eq!(stored.created_at, fixed_now());
        assert_eq!(stored.category, "Geography");
        assert_eq!(stored.score, 4);
    }

    #[tokio::test]
    async fn record_reports_repository_failure() {
        let service = ResultService::new(fixed_clock(), Arc::new(BrokenRepository));
        let err = service
            .record(&summary(QuizDomain::Math, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ResultServiceError::Storage(StorageError::Connection(_))));
    }

    #[tokio::test]
    async fn recent_lists_newest_first() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut clock = fixed_clock();
        for score in [1, 2, 3] {
            ResultService::new(clock, repo.clone())
                .record(&summary(QuizDomain::Math, score))
                .await
                .unwrap();
            clock.advance(Duration::minutes(1));
        }
        let service = ResultService::new(clock, repo);
        let recent = service.recent(2).await.unwrap();
        assert_eq!(recent.iter().map(|r| r.score).collect::<Vec<_>>(), vec![3, 2]);
    }

    #[tokio::test]
    async fn recorder_drains_sink_until_closed() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = Arc::new(ResultService::new(fixed_clock(), repo.clone()));
        let (sink, handle) = ResultRecorder::spawn(service);

        sink.save(&summary(QuizDomain::GeneralKnowledge, 5)).unwrap();
        sink.save(&summary(QuizDomain::Math, 0)).unwrap();
        drop(sink);

        assert_eq!(handle.await.unwrap(), 2);
        assert_eq!(repo.recent_results(10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn recorder_keeps_running_after_storage_error() {
        let service = Arc::new(ResultService::new(fixed_clock(), Arc::new(BrokenRepository)));
        let (sink, handle) = ResultRecorder::spawn(service);
        sink.save(&summary(QuizDomain::Math, 1)).unwrap();
        sink.save(&summary(QuizDomain::Math, 2)).unwrap();
        drop(sink);
        assert_eq!(handle.await.unwrap(), 0);
    }
}
