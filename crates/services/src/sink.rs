//! Destinations for finished session summaries.

use std::sync::{Arc, Mutex};

use quiz_core::model::SessionSummary;
use tokio::sync::mpsc;

use crate::error::ResultSinkError;

/// Receives the summary of a finished session.
///
/// Delivery is fire-and-forget from the session's point of view: an error is
/// logged by the caller and never undoes the finish.
pub trait ResultSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `ResultSinkError` if the summary could not be handed over.
    fn save(&self, summary: &SessionSummary) -> Result<(), ResultSinkError>;
}

/// Keeps every summary it receives. Handy for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Arc<Mutex<Vec<SessionSummary>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the summaries saved so far, oldest first.
    #[must_use]
    pub fn summaries(&self) -> Vec<SessionSummary> {
        self.saved
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saved.lock().map(|guard| guard.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultSink for MemorySink {
    fn save(&self, summary: &SessionSummary) -> Result<(), ResultSinkError> {
        self.saved
            .lock()
            .map_err(|e| ResultSinkError::Unavailable(e.to_string()))?
            .push(summary.clone());
        Ok(())
    }
}

/// Forwards summaries to a background consumer over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SessionSummary>,
}

impl ChannelSink {
    /// Creates a sink together with the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionSummary>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ResultSink for ChannelSink {
    fn save(&self, summary: &SessionSummary) -> Result<(), ResultSinkError> {
        self.tx
            .send(summary.clone())
            .map_err(|_| ResultSinkError::Closed)
    }
}
