//! Line-based quiz front end on stdin/stdout.

use std::io::Write;
use std::sync::Arc;

use quiz_core::model::{Answer, DifficultyLevel, QuizDomain, SessionSummary};
use quiz_core::timer::format_clock;
use services::{
    AppServices, ResultServiceError, SessionCommand, SessionEvent, SessionRunner, SessionState,
};
use storage::repository::GameResult;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const QUIT: &str = ":q";
const WARN_AT_SECONDS: u32 = 10;

/// Maps a typed line to an answer for the question on screen.
///
/// Choice questions take 1-based option numbers; anything else counts as no
/// answer. Numeric questions keep the raw text for the strict integer check.
fn parse_answer(line: &str, is_choice: bool) -> Answer {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Answer::Blank;
    }
    if !is_choice {
        return Answer::text(trimmed);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 => Answer::Selected(n - 1),
        _ => Answer::Blank,
    }
}

fn prompt_marker() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[derive(Debug, Default)]
struct Screen {
    is_choice: bool,
    awaiting: bool,
}

impl Screen {
    /// Renders one event. Returns `true` once the session is over.
    fn render(&mut self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::QuestionShown {
                index,
                total,
                prompt,
                options,
                seconds,
            } => {
                self.is_choice = !options.is_empty();
                self.awaiting = false;
                println!();
                println!(
                    "Question {}/{}  ({} to answer)",
                    index + 1,
                    total,
                    format_clock(Some(*seconds))
                );
                println!("  {prompt}");
                for (i, option) in options.iter().enumerate() {
                    println!("    {}. {option}", i + 1);
                }
                prompt_marker();
                false
            }
            SessionEvent::Tick { remaining, .. } => {
                if *remaining == WARN_AT_SECONDS {
                    println!();
                    println!("  {} left", format_clock(Some(*remaining)));
                    prompt_marker();
                }
                false
            }
            SessionEvent::Answered(outcome) => {
                self.awaiting = true;
                println!();
                if outcome.timed_out {
                    println!("  Time's up! The answer was {}.", outcome.correct_answer);
                } else if outcome.correct {
                    println!("  Correct!");
                } else {
                    println!("  Wrong, the answer was {}.", outcome.correct_answer);
                }
                if !outcome.timed_out {
                    println!("  (press Enter to continue)");
                }
                false
            }
            SessionEvent::Finished(summary) => {
                println!();
                println!(
                    "Finished {}: {}/{} correct.",
                    summary.domain(),
                    summary.score(),
                    summary.total()
                );
                true
            }
            SessionEvent::Cancelled => {
                println!();
                println!("Quiz cancelled.");
                true
            }
        }
    }

    fn command_for(&self, line: &str) -> SessionCommand {
        if line.trim() == QUIT {
            SessionCommand::Cancel
        } else if self.awaiting {
            SessionCommand::Advance
        } else {
            SessionCommand::Submit(parse_answer(line, self.is_choice))
        }
    }
}

/// Plays one session in the terminal and waits until its result is stored.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or a background task fails.
pub async fn play(
    services: &AppServices,
    domain: QuizDomain,
    level: DifficultyLevel,
    count: usize,
) -> Result<Option<SessionSummary>, Box<dyn std::error::Error>> {
    let (sink, recorder) = services.spawn_recorder();
    let mut session = services.new_session(Arc::new(sink));
    session.start(domain, count, level);

    println!(
        "{} ({}, {} per question). Type {QUIT} to quit.",
        domain,
        level.label(),
        format_clock(Some(level.seconds_per_question()))
    );

    let mut handle = SessionRunner::spawn(session, services.config().session.auto_advance_delay());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut screen = Screen::default();
    let mut stdin_open = true;
    let mut summary = None;

    loop {
        tokio::select! {
            event = handle.events.recv() => {
                let Some(event) = event else { break };
                if let SessionEvent::Finished(s) = &event {
                    summary = Some(s.clone());
                }
                if screen.render(&event) {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                let command = match line? {
                    Some(line) => screen.command_for(&line),
                    None => {
                        stdin_open = false;
                        SessionCommand::Cancel
                    }
                };
                if handle.commands.send(command).await.is_err() {
                    break;
                }
            }
        }
    }

    drop(handle.commands);
    let state = handle.task.await?;
    let stored = recorder.await?;
    debug!(?state, stored, "session closed");
    if state != SessionState::Finished {
        return Ok(None);
    }
    Ok(summary)
}

/// Prints the most recent results, newest first.
///
/// # Errors
///
/// Returns `ResultServiceError` if results cannot be read.
pub async fn history(services: &AppServices, limit: u32) -> Result<(), ResultServiceError> {
    let results = services.results().recent(limit).await?;
    if results.is_empty() {
        println!("No results yet.");
        return Ok(());
    }
    for result in &results {
        println!("{}", format_result(result));
    }
    Ok(())
}

fn format_result(result: &GameResult) -> String {
    format!(
        "{}  {:<10} {:<8} {:>3}/{:<3} ({}s per question)",
        result.created_at.format("%Y-%m-%d %H:%M"),
        result.category,
        result.difficulty.to_string(),
        result.score,
        result.total,
        result.seconds_per_question
    )
}
