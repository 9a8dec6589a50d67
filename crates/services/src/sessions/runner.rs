use std::time::Duration;

use quiz_core::model::{Answer, SessionSummary};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use super::service::{AnswerOutcome, QuizSession};
use super::state::SessionState;

const TICK: Duration = Duration::from_secs(1);
const CHANNEL_CAPACITY: usize = 32;

/// Caller input for a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Submit(Answer),
    Advance,
    Cancel,
}

/// What the runner reports back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    QuestionShown {
        index: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
        seconds: u32,
    },
    Tick {
        index: usize,
        remaining: u32,
    },
    Answered(AnswerOutcome),
    Finished(SessionSummary),
    Cancelled,
}

/// Channels to a session running on its own task.
pub struct SessionHandle {
    pub commands: mpsc::Sender<SessionCommand>,
    pub events: mpsc::Receiver<SessionEvent>,
    pub task: JoinHandle<SessionState>,
}

/// Drives one started `QuizSession` from a single task.
///
/// Wall-clock ticks, caller commands and the delayed advance after a timeout
/// are multiplexed with `select!`, so the session sees them strictly one at a
/// time.
pub struct SessionRunner {
    session: QuizSession,
    auto_advance_delay: Duration,
    events: mpsc::Sender<SessionEvent>,
}

impl SessionRunner {
    #[must_use]
    pub fn new(
        session: QuizSession,
        auto_advance_delay: Duration,
        events: mpsc::Sender<SessionEvent>,
    ) -> Self {
        Self {
            session,
            auto_advance_delay,
            events,
        }
    }

    /// Spawns the runner on the current tokio runtime.
    #[must_use]
    pub fn spawn(session: QuizSession, auto_advance_delay: Duration) -> SessionHandle {
        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let runner = Self::new(session, auto_advance_delay, event_tx);
        let task = tokio::spawn(runner.run(command_rx));
        SessionHandle {
            commands: command_tx,
            events: event_rx,
            task,
        }
    }

    /// Runs until the session finishes or is cancelled and returns the final
    /// state. A closed command channel counts as a cancel.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand>) -> SessionState {
        let mut ticker = question_ticker();
        let mut auto_advance_at: Option<Instant> = None;
        self.announce().await;

        while !self.session.state().is_terminal() {
            let presenting = matches!(self.session.state(), SessionState::Presenting(_));
            let deadline = auto_advance_at.unwrap_or_else(Instant::now);

            tokio::select! {
                _ = ticker.tick(), if presenting => {
                    if let Some(tick) = self.session.tick() {
                        let index = self.session.state().index().unwrap_or_default();
                        self.emit(SessionEvent::Tick { index, remaining: tick.remaining }).await;
                        if tick.expired {
                            debug!(index, "question timed out");
                            self.emit_outcome().await;
                            if self.session.auto_advance_pending() {
                                auto_advance_at = Some(Instant::now() + self.auto_advance_delay);
                            }
                        }
                    }
                }
                () = time::sleep_until(deadline), if auto_advance_at.is_some() => {
                    auto_advance_at = None;
                    self.session.auto_advance();
                    ticker = question_ticker();
                    self.announce().await;
                }
                command = commands.recv() => match command {
                    Some(SessionCommand::Submit(answer)) => {
                        if let Some(outcome) = self.session.submit(answer) {
                            self.emit(SessionEvent::Answered(outcome)).await;
                        }
                    }
                    Some(SessionCommand::Advance) => {
                        let before = self.session.state();
                        if self.session.advance() != before {
                            auto_advance_at = None;
                            ticker = question_ticker();
                            self.announce().await;
                        }
                    }
                    Some(SessionCommand::Cancel) | None => {
                        self.session.cancel();
                    }
                },
            }
        }

        match self.session.state() {
            SessionState::Finished => {
                if let Some(summary) = self.session.summary().cloned() {
                    self.emit(SessionEvent::Finished(summary)).await;
                }
            }
            _ => self.emit(SessionEvent::Cancelled).await,
        }
        self.session.state()
    }

    async fn announce(&self) {
        let SessionState::Presenting(index) = self.session.state() else {
            return;
        };
        let Some(question) = self.session.current_question() else {
            return;
        };
        let event = SessionEvent::QuestionShown {
            index,
            total: self.session.total(),
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            seconds: self.session.remaining_seconds().unwrap_or_default(),
        };
        self.emit(event).await;
    }

    async fn emit_outcome(&self) {
        if let Some(outcome) = self.session.last_outcome().cloned() {
            self.emit(SessionEvent::Answered(outcome)).await;
        }
    }

    async fn emit(&self, event: SessionEvent) {
        // A caller that stopped listening still lets the session run out.
        let _ = self.events.send(event).await;
    }
}

/// Fresh one-second interval whose first tick is a full second away.
fn question_ticker() -> Interval {
    let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
