use std::collections::HashSet;
use std::sync::Arc;

use quiz_core::CorpusCatalog;
use quiz_core::model::{Answer, DifficultyLevel, QuestionKind, QuestionSpec, QuizDomain};
use services::{MemorySink, QuestionSource, QuizSession, SessionState};

fn new_session(sink: &MemorySink) -> QuizSession {
    let source = QuestionSource::new(Arc::new(CorpusCatalog::builtin()));
    QuizSession::new(source, Arc::new(sink.clone()))
}

fn correct_value(question: &QuestionSpec) -> i64 {
    match question.kind() {
        QuestionKind::Numeric { correct_value } => *correct_value,
        QuestionKind::Choice { .. } => panic!("expected a numeric question"),
    }
}

#[test]
fn single_easy_math_question_scores_one() {
    let sink = MemorySink::new();
    let mut session = new_session(&sink);
    session.start(QuizDomain::Math, 1, DifficultyLevel::clamped(1));

    let question = session.current_question().unwrap().clone();
    let parts: Vec<&str> = question.prompt().split_whitespace().collect();
    assert_eq!(parts.len(), 5, "unexpected prompt {}", question.prompt());
    assert!(["+", "-", "×"].contains(&parts[1]));
    for operand in [parts[0], parts[2]] {
        let value: i64 = operand.parse().unwrap();
        assert!((1..=12).contains(&value));
    }

    let outcome = session
        .submit(Answer::text(correct_value(&question).to_string()))
        .unwrap();
    assert!(outcome.correct);
    assert_eq!(session.advance(), SessionState::Finished);

    let saved = sink.summaries();
    assert_eq!(saved.len(), 1);
    assert_eq!((saved[0].score(), saved[0].total()), (1, 1));
    assert_eq!(saved[0].seconds_per_question(), 30);
}

#[test]
fn expert_math_equations_all_answered_correctly() {
    let sink = MemorySink::new();
    let mut session = new_session(&sink);
    session.start(QuizDomain::Math, 3, DifficultyLevel::clamped(4));

    for _ in 0..3 {
        let question = session.current_question().unwrap().clone();
        assert!(question.prompt().starts_with("Solve for x: "));
        session.submit(Answer::text(correct_value(&question).to_string()));
        session.advance();
    }

    assert_eq!(session.state(), SessionState::Finished);
    let summary = session.summary().unwrap();
    assert_eq!((summary.score(), summary.total()), (3, 3));
    assert_eq!(summary.difficulty(), DifficultyLevel::Expert);
}

#[test]
fn out_of_range_level_is_clamped() {
    let sink = MemorySink::new();
    let mut session = new_session(&sink);
    session.start(QuizDomain::Math, 1, DifficultyLevel::clamped(42));
    assert_eq!(session.level(), DifficultyLevel::Expert);
    assert_eq!(session.remaining_seconds(), Some(300));

    let mut low = new_session(&sink);
    low.start(QuizDomain::Math, 1, DifficultyLevel::clamped(-3));
    assert_eq!(low.level(), DifficultyLevel::Easy);
}

#[test]
fn general_knowledge_session_draws_distinct_choices() {
    let sink = MemorySink::new();
    let mut session = new_session(&sink);
    session.start(QuizDomain::GeneralKnowledge, 5, DifficultyLevel::clamped(2));
    assert_eq!(session.total(), 5);

    let catalog = CorpusCatalog::builtin();
    let corpus = quiz_core::CorpusProvider::corpus(
        &catalog,
        QuizDomain::GeneralKnowledge,
        DifficultyLevel::Medium,
    )
    .to_vec();

    let mut prompts = HashSet::new();
    // Time out the first question, answer the rest by selecting an option.
    let first = session.timeout().unwrap();
    assert!(!first.correct);
    prompts.insert(session.current_question().unwrap().prompt().to_owned());
    session.auto_advance();

    while let SessionState::Presenting(_) = session.state() {
        let question = session.current_question().unwrap().clone();
        assert!(question.is_choice());
        assert!(corpus.contains(&question));
        prompts.insert(question.prompt().to_owned());
        session.submit(Answer::Selected(0));
        session.advance();
    }

    assert_eq!(prompts.len(), 5);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.summaries()[0].total(), 5);
}

#[test]
fn finishes_after_exactly_total_presentations() {
    let sink = MemorySink::new();
    let mut session = new_session(&sink);
    session.start(QuizDomain::Geography, 8, DifficultyLevel::Hard);

    let mut presentations = 0;
    while let SessionState::Presenting(index) = session.state() {
        presentations += 1;
        if index % 2 == 0 {
            session.submit(Answer::Selected(1));
            session.advance();
        } else {
            session.timeout();
            session.auto_advance();
        }
    }

    assert_eq!(presentations, 8);
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(sink.len(), 1);
    let progress = session.progress();
    assert_eq!(progress.answered, 8);
    assert_eq!(progress.remaining, 0);
    assert!(progress.is_complete);
}
