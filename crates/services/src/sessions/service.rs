use std::sync::Arc;

use quiz_core::model::{Answer, DifficultyLevel, QuestionSpec, QuizDomain, SessionSummary};
use quiz_core::{CountdownTimer, TimerTick};
use rand::Rng;
use tracing::{debug, info, warn};

use super::progress::SessionProgress;
use super::source::QuestionSource;
use super::state::SessionState;
use crate::sink::ResultSink;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Feedback for the question that was just closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub correct: bool,
    pub timed_out: bool,
    pub correct_answer: String,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed, scored pass through a fixed question sequence.
///
/// The session is synchronous and performs no I/O besides handing its summary
/// to the `ResultSink` once. Time enters only through [`QuizSession::tick`],
/// and the delayed advance after a timeout is requested through
/// [`QuizSession::auto_advance_pending`] for the driver to schedule.
pub struct QuizSession {
    source: QuestionSource,
    sink: Arc<dyn ResultSink>,
    domain: QuizDomain,
    level: DifficultyLevel,
    questions: Vec<QuestionSpec>,
    state: SessionState,
    score: u32,
    answered: usize,
    timer: CountdownTimer,
    last_outcome: Option<AnswerOutcome>,
    auto_advance_pending: bool,
    result_emitted: bool,
    summary: Option<SessionSummary>,
}

impl QuizSession {
    #[must_use]
    pub fn new(source: QuestionSource, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            source,
            sink,
            domain: QuizDomain::Math,
            level: DifficultyLevel::default(),
            questions: Vec::new(),
            state: SessionState::NotStarted,
            score: 0,
            answered: 0,
            timer: CountdownTimer::new(),
            last_outcome: None,
            auto_advance_pending: false,
            result_emitted: false,
            summary: None,
        }
    }

    /// Starts the session with freshly drawn questions.
    ///
    /// Only the first call has an effect; later calls return the current state.
    pub fn start(
        &mut self,
        domain: QuizDomain,
        count: usize,
        level: DifficultyLevel,
    ) -> SessionState {
        self.start_with(&mut rand::rng(), domain, count, level)
    }

    /// Same as [`QuizSession::start`] with an explicit RNG.
    pub fn start_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        domain: QuizDomain,
        count: usize,
        level: DifficultyLevel,
    ) -> SessionState {
        if self.state != SessionState::NotStarted {
            return self.state;
        }
        let questions = self.source.questions_with(rng, domain, level, count);
        self.begin(domain, level, questions)
    }

    /// Starts the session over a prepared question sequence.
    ///
    /// Only the first call has an effect; later calls return the current state.
    pub fn start_with_questions(
        &mut self,
        domain: QuizDomain,
        level: DifficultyLevel,
        questions: Vec<QuestionSpec>,
    ) -> SessionState {
        if self.state != SessionState::NotStarted {
            return self.state;
        }
        self.begin(domain, level, questions)
    }

    fn begin(
        &mut self,
        domain: QuizDomain,
        level: DifficultyLevel,
        questions: Vec<QuestionSpec>,
    ) -> SessionState {
        self.domain = domain;
        self.level = level;
        self.questions = questions;
        self.score = 0;
        self.answered = 0;
        self.last_outcome = None;
        self.auto_advance_pending = false;
        self.result_emitted = false;
        self.summary = None;

        info!(
            domain = %domain,
            level = level.value(),
            total = self.questions.len(),
            "quiz session started"
        );

        if self.questions.is_empty() {
            self.finish();
        } else {
            self.present(0);
        }
        self.state
    }

    fn present(&mut self, index: usize) {
        self.state = SessionState::Presenting(index);
        self.timer.start(self.level.seconds_per_question());
        debug!(index, "presenting question");
    }

    /// Evaluates `answer` against the question on screen.
    ///
    /// Returns `None` when no question is accepting answers.
    pub fn submit(&mut self, answer: Answer) -> Option<AnswerOutcome> {
        let SessionState::Presenting(index) = self.state else {
            return None;
        };
        let correct = self.questions[index].is_correct(&answer);
        Some(self.close_question(index, correct, false))
    }

    /// Closes the question on screen as incorrect and requests an auto-advance.
    ///
    /// Returns `None` when no question is accepting answers.
    pub fn timeout(&mut self) -> Option<AnswerOutcome> {
        let SessionState::Presenting(index) = self.state else {
            return None;
        };
        let outcome = self.close_question(index, false, true);
        self.auto_advance_pending = true;
        Some(outcome)
    }

    fn close_question(&mut self, index: usize, correct: bool, timed_out: bool) -> AnswerOutcome {
        self.timer.cancel();
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.state = SessionState::Awaiting(index);

        let outcome = AnswerOutcome {
            index,
            correct,
            timed_out,
            correct_answer: self.questions[index].correct_answer_text(),
        };
        debug!(index, correct, timed_out, score = self.score, "question closed");
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Counts one second off the question timer.
    ///
    /// The tick that reaches zero times the question out.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !matches!(self.state, SessionState::Presenting(_)) {
            return None;
        }
        let tick = self.timer.tick()?;
        if tick.expired {
            self.timeout();
        }
        Some(tick)
    }

    /// Moves past the answered question.
    ///
    /// Clears any pending auto-advance, so a question is only advanced once.
    pub fn advance(&mut self) -> SessionState {
        let SessionState::Awaiting(index) = self.state else {
            return self.state;
        };
        self.auto_advance_pending = false;
        let next = index + 1;
        if next < self.questions.len() {
            self.present(next);
        } else {
            self.finish();
        }
        self.state
    }

    /// Performs the advance scheduled by a timeout, if it is still pending.
    pub fn auto_advance(&mut self) -> SessionState {
        if !self.auto_advance_pending {
            return self.state;
        }
        self.advance()
    }

    /// Abandons the session. A cancelled session never reports a result.
    pub fn cancel(&mut self) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.timer.cancel();
        self.auto_advance_pending = false;
        self.state = SessionState::Cancelled;
        info!(
            domain = %self.domain,
            answered = self.answered,
            "quiz session cancelled"
        );
        self.state
    }

    fn finish(&mut self) {
        self.timer.cancel();
        self.state = SessionState::Finished;
        if self.result_emitted {
            return;
        }
        self.result_emitted = true;

        let summary = match SessionSummary::from_session(
            self.domain,
            self.level,
            self.score,
            self.questions.len(),
        ) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "could not build session summary");
                return;
            }
        };
        info!(
            domain = %self.domain,
            level = self.level.value(),
            score = summary.score(),
            total = summary.total(),
            "quiz session finished"
        );
        if let Err(err) = self.sink.save(&summary) {
            warn!(error = %err, "failed to deliver session result");
        }
        self.summary = Some(summary);
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn domain(&self) -> QuizDomain {
        self.domain
    }

    #[must_use]
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// The question currently presented or awaiting advance.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionSpec> {
        self.state.index().and_then(|i| self.questions.get(i))
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn auto_advance_pending(&self) -> bool {
        self.auto_advance_pending
    }

    /// Seconds left on the running question, `None` when no timer runs.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.timer.is_active().then(|| self.timer.remaining())
    }

    /// Summary built when the session finished.
    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total();
        SessionProgress {
            total,
            answered: self.answered,
            score: self.score,
            remaining: total.saturating_sub(self.answered),
            is_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultSinkError;
    use crate::sink::MemorySink;
    use quiz_core::CorpusCatalog;

    fn session_with(sink: &MemorySink) -> QuizSession {
        let source = QuestionSource::new(Arc::new(CorpusCatalog::builtin()));
        QuizSession::new(source, Arc::new(sink.clone()))
    }

    fn numeric(values: &[i64]) -> Vec<QuestionSpec> {
        values
            .iter()
            .map(|v| QuestionSpec::numeric(format!("{v} + 0 = ?"), *v))
            .collect()
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn save(&self, _summary: &SessionSummary) -> Result<(), ResultSinkError> {
            Err(ResultSinkError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn submit_scores_and_waits_for_advance() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Easy, numeric(&[4, 9]));
        assert_eq!(session.state(), SessionState::Presenting(0));
        assert_eq!(session.remaining_seconds(), Some(30));

        let outcome = session.submit(Answer::text(" 4 ")).unwrap();
        assert!(outcome.correct);
        assert!(!outcome.timed_out);
        assert_eq!(session.state(), SessionState::Awaiting(0));
        assert_eq!(session.remaining_seconds(), None);
        assert!(!session.auto_advance_pending());

        // Only one answer per question.
        assert_eq!(session.submit(Answer::text("4")), None);
        assert_eq!(session.score(), 1);

        assert_eq!(session.advance(), SessionState::Presenting(1));
        session.submit(Answer::text("nine"));
        assert_eq!(session.advance(), SessionState::Finished);

        assert_eq!(sink.len(), 1);
        let summary = session.summary().unwrap();
        assert_eq!((summary.score(), summary.total()), (1, 2));
    }

    #[test]
    fn timeout_overrides_pending_input_and_ignores_late_submit() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Easy, numeric(&[3, 5]));

        let outcome = session.timeout().unwrap();
        assert!(!outcome.correct);
        assert!(outcome.timed_out);
        assert_eq!(outcome.correct_answer, "3");
        assert!(session.auto_advance_pending());

        assert_eq!(session.submit(Answer::text("3")), None);
        assert_eq!(session.score(), 0);

        assert_eq!(session.auto_advance(), SessionState::Presenting(1));
        assert!(!session.auto_advance_pending());
    }

    #[test]
    fn ticks_count_down_then_time_out() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Easy, numeric(&[1]));

        for expected in (1..30).rev() {
            let tick = session.tick().unwrap();
            assert_eq!(tick.remaining, expected);
            assert!(!tick.expired);
        }
        let last = session.tick().unwrap();
        assert!(last.expired);
        assert_eq!(session.state(), SessionState::Awaiting(0));
        assert!(session.last_outcome().unwrap().timed_out);
        assert_eq!(session.tick(), None);

        assert_eq!(session.auto_advance(), SessionState::Finished);
        assert_eq!(sink.summaries()[0].score(), 0);
    }

    #[test]
    fn manual_advance_cancels_pending_auto_advance() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(
            QuizDomain::Math,
            DifficultyLevel::Easy,
            numeric(&[1, 2, 3]),
        );
        session.timeout();
        assert_eq!(session.advance(), SessionState::Presenting(1));

        // The delayed advance arriving late must not skip question 2.
        assert_eq!(session.auto_advance(), SessionState::Presenting(1));
    }

    #[test]
    fn finished_session_emits_once_and_ignores_input() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Easy, numeric(&[7]));
        session.submit(Answer::text("7"));
        session.advance();
        assert!(session.is_complete());

        assert_eq!(session.submit(Answer::text("7")), None);
        assert_eq!(session.timeout(), None);
        assert_eq!(session.advance(), SessionState::Finished);
        assert_eq!(session.tick(), None);
        assert_eq!(
            session.start(QuizDomain::Math, 3, DifficultyLevel::Easy),
            SessionState::Finished
        );
        assert_eq!(session.cancel(), SessionState::Finished);

        assert_eq!(sink.len(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn cancelled_session_never_emits() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start(QuizDomain::Geography, 3, DifficultyLevel::Medium);
        session.submit(Answer::Selected(0));
        assert_eq!(session.cancel(), SessionState::Cancelled);

        assert_eq!(session.advance(), SessionState::Cancelled);
        assert_eq!(session.auto_advance(), SessionState::Cancelled);
        assert_eq!(session.tick(), None);
        assert!(sink.is_empty());
        assert!(session.summary().is_none());
    }

    #[test]
    fn cancel_drops_a_pending_auto_advance() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Easy, numeric(&[1, 2]));
        session.timeout();
        assert!(session.auto_advance_pending());

        assert_eq!(session.cancel(), SessionState::Cancelled);
        assert!(!session.auto_advance_pending());
        assert_eq!(session.auto_advance(), SessionState::Cancelled);
        assert!(sink.is_empty());
        assert!(session.summary().is_none());
    }

    #[test]
    fn empty_sequence_finishes_immediately_with_zero_total() {
        let sink = MemorySink::new();
        let source = QuestionSource::new(Arc::new(CorpusCatalog::empty()));
        let mut session = QuizSession::new(source, Arc::new(sink.clone()));

        let state = session.start(QuizDomain::GeneralKnowledge, 5, DifficultyLevel::Easy);
        assert_eq!(state, SessionState::Finished);
        let saved = sink.summaries();
        assert_eq!(saved.len(), 1);
        assert_eq!((saved[0].score(), saved[0].total()), (0, 0));
    }

    #[test]
    fn sink_failure_still_finishes() {
        let source = QuestionSource::new(Arc::new(CorpusCatalog::builtin()));
        let mut session = QuizSession::new(source, Arc::new(FailingSink));
        session.start_with_questions(QuizDomain::Math, DifficultyLevel::Hard, numeric(&[2]));
        session.submit(Answer::text("2"));

        assert_eq!(session.advance(), SessionState::Finished);
        assert_eq!(session.summary().map(SessionSummary::score), Some(1));
        assert_eq!(session.summary().map(SessionSummary::seconds_per_question), Some(180));
    }

    #[test]
    fn progress_tracks_answers_and_score() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start_with_questions(
            QuizDomain::Math,
            DifficultyLevel::Medium,
            numeric(&[1, 2, 3]),
        );
        session.submit(Answer::text("1"));
        session.advance();
        session.timeout();

        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 3,
                answered: 2,
                score: 1,
                remaining: 1,
                is_complete: false,
            }
        );
    }

    #[test]
    fn count_beyond_corpus_yields_fewer_questions() {
        let sink = MemorySink::new();
        let mut session = session_with(&sink);
        session.start(QuizDomain::Geography, 50, DifficultyLevel::Expert);
        assert_eq!(session.total(), 11);
    }
}
