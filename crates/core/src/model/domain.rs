use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject area of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDomain {
    Math,
    GeneralKnowledge,
    Geography,
}

/// Where a domain's questions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrigin {
    /// Built on the fly by the procedural generator.
    Procedural,
    /// Drawn from a fixed, hand-authored bank.
    Bank,
}

impl QuizDomain {
    pub const ALL: [QuizDomain; 3] = [Self::Math, Self::GeneralKnowledge, Self::Geography];

    #[must_use]
    pub fn origin(self) -> QuestionOrigin {
        match self {
            Self::Math => QuestionOrigin::Procedural,
            Self::GeneralKnowledge | Self::Geography => QuestionOrigin::Bank,
        }
    }

    /// Category label stored alongside results.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::Math => "Maths",
            Self::GeneralKnowledge => "General",
            Self::Geography => "Geography",
        }
    }

    /// Human-facing title, e.g. for a quiz header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Math => "Maths Quiz",
            Self::GeneralKnowledge => "General Knowledge",
            Self::Geography => "Geography",
        }
    }

    /// Reverse of [`QuizDomain::category`], used when reading stored results.
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.category().eq_ignore_ascii_case(category))
    }
}

impl fmt::Display for QuizDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error type for parsing a domain from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDomainError {
    raw: String,
}

impl fmt::Display for ParseDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quiz domain: {}", self.raw)
    }
}

impl std::error::Error for ParseDomainError {}

impl FromStr for QuizDomain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "math" | "maths" => Ok(Self::Math),
            "general" | "general_knowledge" | "gk" => Ok(Self::GeneralKnowledge),
            "geography" | "geo" => Ok(Self::Geography),
            _ => Err(ParseDomainError { raw: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("Maths".parse::<QuizDomain>().unwrap(), QuizDomain::Math);
        assert_eq!(
            "general-knowledge".parse::<QuizDomain>().unwrap(),
            QuizDomain::GeneralKnowledge
        );
        assert_eq!("GK".parse::<QuizDomain>().unwrap(), QuizDomain::GeneralKnowledge);
        assert_eq!(" geo ".parse::<QuizDomain>().unwrap(), QuizDomain::Geography);
        assert!("history".parse::<QuizDomain>().is_err());
    }

    #[test]
    fn category_round_trips() {
        for domain in QuizDomain::ALL {
            assert_eq!(QuizDomain::from_category(domain.category()), Some(domain));
        }
        assert_eq!(QuizDomain::Math.origin(), QuestionOrigin::Procedural);
        assert_eq!(QuizDomain::Geography.origin(), QuestionOrigin::Bank);
    }
}
