use std::sync::Arc;

use quiz_core::{Clock, CorpusCatalog, CorpusProvider};
use storage::repository::Storage;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::results::{ResultRecorder, ResultService};
use crate::sessions::{QuestionSource, QuizSession};
use crate::sink::{ChannelSink, ResultSink};

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    catalog: Arc<CorpusCatalog>,
    results: Arc<ResultService>,
}

impl AppServices {
    /// Build services from `config`: `SQLite` storage when `database_url` is
    /// set, in-memory storage otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the corpus file or storage cannot be
    /// initialized.
    pub async fn from_config(config: QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = config.catalog()?;
        let storage = match config.database_url.as_deref() {
            Some(url) => {
                info!(database_url = url, "using sqlite result storage");
                Storage::sqlite(url).await?
            }
            None => Storage::in_memory(),
        };
        Ok(Self::assemble(config, catalog, storage, clock))
    }

    /// Services over the built-in corpus and in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::assemble(
            QuizConfig::default(),
            CorpusCatalog::builtin(),
            Storage::in_memory(),
            clock,
        )
    }

    fn assemble(
        config: QuizConfig,
        catalog: CorpusCatalog,
        storage: Storage,
        clock: Clock,
    ) -> Self {
        let results = Arc::new(ResultService::new(clock, Arc::clone(&storage.results)));
        Self {
            config,
            catalog: Arc::new(catalog),
            results,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn question_source(&self) -> QuestionSource {
        let corpus: Arc<dyn CorpusProvider> = self.catalog.clone();
        QuestionSource::new(corpus)
    }

    /// A fresh, not yet started session reporting to `sink`.
    #[must_use]
    pub fn new_session(&self, sink: Arc<dyn ResultSink>) -> QuizSession {
        QuizSession::new(self.question_source(), sink)
    }

    /// Spawns a recorder persisting whatever is saved into the returned sink.
    #[must_use]
    pub fn spawn_recorder(&self) -> (ChannelSink, JoinHandle<usize>) {
        ResultRecorder::spawn(self.results())
    }
}
