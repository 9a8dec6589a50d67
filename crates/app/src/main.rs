use std::fmt;
use std::path::PathBuf;

use quiz_core::model::{DifficultyLevel, QuizDomain};
use services::{AppServices, Clock, QuizConfig};

mod telemetry;
mod terminal;

const DEFAULT_HISTORY_LIMIT: u32 = 10;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDomain { raw: String },
    InvalidNumber { flag: &'static str, raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDomain { raw } => write!(f, "invalid --domain value: {raw}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = require_value(args, flag)?;
    value
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw: value })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play    [--domain <math|general|geography>] [--level <1-4>]");
    eprintln!("                              [--count <n>] [--db <sqlite_url>] [--config <path>]");
    eprintln!("  cargo run -p app -- history [--limit <n>] [--db <sqlite_url>] [--config <path>]");
    eprintln!();
    eprintln!("Defaults for play:");
    eprintln!("  --domain math");
    eprintln!("  --level 1");
    eprintln!("  --count from [session] question_count (10)");
    eprintln!();
    eprintln!("While playing: type the answer (or option number) and press Enter.");
    eprintln!("An empty line means no answer, Enter again moves on, :q quits.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CONFIG_PATH, QUIZ_DB_URL, QUIZ_LOG, QUIZ_LOG_FORMAT");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    History,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

/// Flags accepted by every command.
#[derive(Debug, Default)]
struct StorageArgs {
    db_url: Option<String>,
    config_path: Option<PathBuf>,
}

impl StorageArgs {
    /// Consumes `--db` or `--config`. Returns `false` for any other flag.
    fn accept(
        &mut self,
        arg: &str,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<bool, ArgsError> {
        match arg {
            "--db" => {
                let value = require_value(args, "--db")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidDbUrl { raw: value });
                }
                self.db_url = Some(value);
                Ok(true)
            }
            "--config" => {
                self.config_path = Some(PathBuf::from(require_value(args, "--config")?));
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[derive(Debug)]
struct PlayArgs {
    domain: QuizDomain,
    level: DifficultyLevel,
    count: Option<usize>,
    storage: StorageArgs,
}

impl PlayArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut domain = QuizDomain::Math;
        let mut level = DifficultyLevel::Easy;
        let mut count = None;
        let mut storage = StorageArgs::default();

        while let Some(arg) = args.next() {
            if storage.accept(&arg, args)? {
                continue;
            }
            match arg.as_str() {
                "--domain" => {
                    let value = require_value(args, "--domain")?;
                    domain = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDomain { raw: value.clone() })?;
                }
                "--level" => {
                    level = DifficultyLevel::clamped(require_number(args, "--level")?);
                }
                "--count" => {
                    let value: usize = require_number(args, "--count")?;
                    if value == 0 {
                        return Err(ArgsError::InvalidNumber {
                            flag: "--count",
                            raw: value.to_string(),
                        });
                    }
                    count = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            domain,
            level,
            count,
            storage,
        })
    }
}

#[derive(Debug)]
struct HistoryArgs {
    limit: u32,
    storage: StorageArgs,
}

impl HistoryArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut limit = DEFAULT_HISTORY_LIMIT;
        let mut storage = StorageArgs::default();

        while let Some(arg) = args.next() {
            if storage.accept(&arg, args)? {
                continue;
            }
            match arg.as_str() {
                "--limit" => limit = require_number(args, "--limit")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { limit, storage })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Config file, then `QUIZ_DB_URL`, then `--db`; later sources win.
async fn build_services(storage: StorageArgs) -> Result<AppServices, Box<dyn std::error::Error>> {
    let mut config = match storage.config_path {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::from_env()?,
    };
    if let Ok(url) = std::env::var("QUIZ_DB_URL") {
        config.database_url = Some(url);
    }
    if let Some(url) = storage.db_url {
        config.database_url = Some(url);
    }

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    if let Some(url) = config.database_url.take() {
        let url = normalize_sqlite_url(url);
        prepare_sqlite_file(&url)?;
        config.database_url = Some(url);
    }

    Ok(AppServices::from_config(config, Clock::default_clock()).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let report = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    match cmd {
        Command::Play => {
            let parsed = PlayArgs::parse(&mut iter).map_err(report)?;
            let services = build_services(parsed.storage).await?;
            let count = parsed
                .count
                .unwrap_or(services.config().session.question_count);
            terminal::play(&services, parsed.domain, parsed.level, count).await?;
            Ok(())
        }
        Command::History => {
            let parsed = HistoryArgs::parse(&mut iter).map_err(report)?;
            let services = build_services(parsed.storage).await?;
            if services.config().database_url.is_none() {
                eprintln!("history: no database configured; results are kept in memory only.");
            }
            terminal::history(&services, parsed.limit).await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        list.iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn play_args_parse_and_clamp() {
        let parsed = PlayArgs::parse(&mut args(&[
            "--domain", "geo", "--level", "9", "--count", "3", "--db", "sqlite::memory:",
        ]))
        .unwrap();
        assert_eq!(parsed.domain, QuizDomain::Geography);
        assert_eq!(parsed.level, DifficultyLevel::Expert);
        assert_eq!(parsed.count, Some(3));
        assert_eq!(parsed.storage.db_url.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn play_args_reject_bad_values() {
        assert!(matches!(
            PlayArgs::parse(&mut args(&["--domain", "history"])),
            Err(ArgsError::InvalidDomain { .. })
        ));
        assert!(matches!(
            PlayArgs::parse(&mut args(&["--count", "0"])),
            Err(ArgsError::InvalidNumber { flag: "--count", .. })
        ));
        assert!(matches!(
            PlayArgs::parse(&mut args(&["--level"])),
            Err(ArgsError::MissingValue { flag: "--level" })
        ));
        assert!(matches!(
            PlayArgs::parse(&mut args(&["--verbose"])),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn history_args_default_limit() {
        let parsed = HistoryArgs::parse(&mut args(&["--config", "quiz.toml"])).unwrap();
        assert_eq!(parsed.limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(parsed.storage.config_path, Some(PathBuf::from("quiz.toml")));
    }

    #[test]
    fn sqlite_urls_are_made_absolute() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/quiz.sqlite3".into()),
            "sqlite:///tmp/quiz.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/quiz.sqlite3".into()),
            "sqlite:///tmp/quiz.sqlite3"
        );
    }
}
