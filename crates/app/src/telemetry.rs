//! Tracing setup for the binary.
//!
//! - `QUIZ_LOG` holds the filter directives (default `warn,services=info`).
//! - `QUIZ_LOG_FORMAT=json` switches to JSON lines.
//!
//! Logs go to stderr; stdout belongs to the quiz.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,services=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("QUIZ_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
