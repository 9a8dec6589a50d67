//! Quiz configuration and extra question corpora, both read from TOML.
//!
//! ```toml
//! database_url = "sqlite://quiz.sqlite3"
//! corpus_path = "extra_questions.toml"
//!
//! [session]
//! question_count = 10
//! auto_advance_ms = 1200
//! ```
//!
//! Every field is optional. Without `database_url` results stay in memory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use quiz_core::CorpusCatalog;
use quiz_core::model::{DifficultyLevel, QuestionOrigin, QuestionSpec, QuizDomain};
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "QUIZ_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct QuizConfig {
    pub database_url: Option<String>,
    pub corpus_path: Option<PathBuf>,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub question_count: usize,
    pub auto_advance_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            auto_advance_ms: 1200,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

impl QuizConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = read(path)?;
        let config = parse(path, &text)?;
        info!(path = %path.display(), "loaded quiz config");
        Ok(config)
    }

    /// Loads the file named by `QUIZ_CONFIG_PATH`, or defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set but the file is unreadable
    /// or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Parses config text that did not come from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for invalid TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse(Path::new("<inline>"), text)
    }

    /// Built-in corpus plus the questions from `corpus_path`, if set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the corpus file cannot be read or an entry is
    /// invalid.
    pub fn catalog(&self) -> Result<CorpusCatalog, ConfigError> {
        let mut catalog = CorpusCatalog::builtin();
        if let Some(path) = &self.corpus_path {
            let added = load_corpus(path, &mut catalog)?;
            info!(path = %path.display(), added, "merged extra questions");
        }
        Ok(catalog)
    }
}

//
// ─── CORPUS FILE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Default)]
struct CorpusFile {
    #[serde(default)]
    question: Vec<CorpusEntry>,
}

/// One `[[question]]` entry of a corpus file.
#[derive(Debug, Deserialize)]
struct CorpusEntry {
    domain: String,
    difficulty: i64,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

/// Reads a corpus file and appends its questions to `catalog`.
///
/// Returns the number of questions added.
///
/// # Errors
///
/// Returns `ConfigError` on I/O or TOML failures, or for the first invalid
/// entry. Nothing is added when any entry is invalid.
pub fn load_corpus(
    path: impl AsRef<Path>,
    catalog: &mut CorpusCatalog,
) -> Result<usize, ConfigError> {
    let path = path.as_ref();
    let text = read(path)?;
    let entries = parse_corpus(path, &text)?;
    let added = entries.len();
    for (domain, level, question) in entries {
        catalog.extend(domain, level, [question]);
    }
    Ok(added)
}

/// Parses and validates corpus entries. Difficulty is clamped to 1..=4.
///
/// # Errors
///
/// Returns `ConfigError` for invalid TOML or the first invalid entry.
pub fn parse_corpus(
    path: &Path,
    text: &str,
) -> Result<Vec<(QuizDomain, DifficultyLevel, QuestionSpec)>, ConfigError> {
    let file: CorpusFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    file.question
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let domain: QuizDomain = entry
                .domain
                .parse()
                .map_err(|source| ConfigError::Domain { index, source })?;
            if domain.origin() == QuestionOrigin::Procedural {
                return Err(ConfigError::ProceduralDomain { index });
            }
            let question = QuestionSpec::choice(entry.prompt, entry.options, entry.correct_index)
                .map_err(|source| ConfigError::Question { index, source })?;
            Ok((domain, DifficultyLevel::clamped(entry.difficulty), question))
        })
        .collect()
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn parse(path: &Path, text: &str) -> Result<QuizConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
