//! Curated multiple-choice banks and the sampler that draws sessions from them.

mod general;
mod geography;

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

use crate::model::{DifficultyLevel, QuestionError, QuestionSpec, QuizDomain};

/// `(prompt, options, correct_index)` as written in the bank tables.
type BankEntry = (&'static str, &'static [&'static str], usize);

/// Read-only source of the fixed corpus for a domain and tier.
pub trait CorpusProvider: Send + Sync {
    /// Returns the corpus in its authored order. Empty when nothing is available.
    fn corpus(&self, domain: QuizDomain, level: DifficultyLevel) -> &[QuestionSpec];
}

/// In-memory corpus keyed by domain and difficulty tier.
#[derive(Debug, Clone, Default)]
pub struct CorpusCatalog {
    banks: HashMap<(QuizDomain, DifficultyLevel), Vec<QuestionSpec>>,
}

impl CorpusCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog holding the General Knowledge and Geography banks.
    ///
    /// # Panics
    ///
    /// Panics if a built-in table entry is malformed.
    #[must_use]
    pub fn builtin() -> Self {
        Self::try_builtin().expect("built-in question banks should be valid")
    }

    fn try_builtin() -> Result<Self, QuestionError> {
        let mut catalog = Self::empty();
        let tables = [
            (QuizDomain::GeneralKnowledge, DifficultyLevel::Easy, general::EASY),
            (QuizDomain::GeneralKnowledge, DifficultyLevel::Medium, general::MEDIUM),
            (QuizDomain::GeneralKnowledge, DifficultyLevel::Hard, general::HARD),
            (QuizDomain::GeneralKnowledge, DifficultyLevel::Expert, general::EXPERT),
            (QuizDomain::Geography, DifficultyLevel::Easy, geography::EASY),
            (QuizDomain::Geography, DifficultyLevel::Medium, geography::MEDIUM),
            (QuizDomain::Geography, DifficultyLevel::Hard, geography::HARD),
            (QuizDomain::Geography, DifficultyLevel::Expert, geography::EXPERT),
        ];
        for (domain, level, table) in tables {
            let questions = table
                .iter()
                .map(|(prompt, options, correct)| {
                    QuestionSpec::choice(*prompt, options.iter().copied(), *correct)
                })
                .collect::<Result<Vec<_>, _>>()?;
            catalog.extend(domain, level, questions);
        }
        Ok(catalog)
    }

    /// Appends questions to the corpus for `domain` at `level`.
    pub fn extend(
        &mut self,
        domain: QuizDomain,
        level: DifficultyLevel,
        questions: impl IntoIterator<Item = QuestionSpec>,
    ) {
        self.banks
            .entry((domain, level))
            .or_default()
            .extend(questions);
    }

    /// Number of questions stored for `domain` at `level`.
    #[must_use]
    pub fn len(&self, domain: QuizDomain, level: DifficultyLevel) -> usize {
        self.corpus(domain, level).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banks.values().all(Vec::is_empty)
    }
}

impl CorpusProvider for CorpusCatalog {
    fn corpus(&self, domain: QuizDomain, level: DifficultyLevel) -> &[QuestionSpec] {
        self.banks
            .get(&(domain, level))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Draws questions without replacement: shuffle a private copy, take a prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankSampler;

impl BankSampler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Samples up to `count` questions using the thread-local RNG.
    #[must_use]
    pub fn sample(&self, corpus: &[QuestionSpec], count: usize) -> Vec<QuestionSpec> {
        self.sample_with(&mut rand::rng(), corpus, count)
    }

    /// Samples `min(count, corpus.len())` questions from the given RNG.
    ///
    /// The corpus slice itself is never reordered.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        corpus: &[QuestionSpec],
        count: usize,
    ) -> Vec<QuestionSpec> {
        let mut pool = corpus.to_vec();
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn builtin_banks_have_expected_sizes() {
        let catalog = CorpusCatalog::builtin();
        let gk: Vec<usize> = DifficultyLevel::ALL
            .iter()
            .map(|level| catalog.len(QuizDomain::GeneralKnowledge, *level))
            .collect();
        let geo: Vec<usize> = DifficultyLevel::ALL
            .iter()
            .map(|level| catalog.len(QuizDomain::Geography, *level))
            .collect();
        assert_eq!(gk, vec![14, 14, 12, 12]);
        assert_eq!(geo, vec![12, 12, 11, 11]);
        assert!(catalog.corpus(QuizDomain::Math, DifficultyLevel::Easy).is_empty());
    }

    #[test]
    fn builtin_prompts_are_unique_within_a_tier() {
        let catalog = CorpusCatalog::builtin();
        for domain in [QuizDomain::GeneralKnowledge, QuizDomain::Geography] {
            for level in DifficultyLevel::ALL {
                let corpus = catalog.corpus(domain, level);
                let prompts: HashSet<&str> = corpus.iter().map(QuestionSpec::prompt).collect();
                assert_eq!(prompts.len(), corpus.len(), "{domain:?} {level:?}");
            }
        }
    }

    #[test]
    fn sample_never_duplicates_or_exceeds_corpus() {
        let catalog = CorpusCatalog::builtin();
        let corpus = catalog.corpus(QuizDomain::Geography, DifficultyLevel::Hard);
        let sampler = BankSampler::new();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = sampler.sample_with(&mut rng, corpus, 5);
            assert_eq!(drawn.len(), 5);
            let prompts: HashSet<&str> = drawn.iter().map(QuestionSpec::prompt).collect();
            assert_eq!(prompts.len(), 5);
            assert!(drawn.iter().all(|q| corpus.contains(q)));
        }

        let everything = sampler.sample(corpus, 50);
        assert_eq!(everything.len(), corpus.len());
    }

    #[test]
    fn sample_leaves_corpus_untouched() {
        let catalog = CorpusCatalog::builtin();
        let before = catalog
            .corpus(QuizDomain::GeneralKnowledge, DifficultyLevel::Medium)
            .to_vec();
        let sampler = BankSampler::new();
        for _ in 0..20 {
            let _ = sampler.sample(
                catalog.corpus(QuizDomain::GeneralKnowledge, DifficultyLevel::Medium),
                5,
            );
        }
        assert_eq!(
            catalog.corpus(QuizDomain::GeneralKnowledge, DifficultyLevel::Medium),
            before.as_slice()
        );
    }

    #[test]
    fn sample_of_empty_corpus_is_empty() {
        assert!(BankSampler::new().sample(&[], 3).is_empty());
    }

    #[test]
    fn extend_appends_to_a_tier() {
        let mut catalog = CorpusCatalog::empty();
        assert!(catalog.is_empty());
        let q = QuestionSpec::choice("Largest planet?", ["Mars", "Jupiter"], 1).unwrap();
        catalog.extend(QuizDomain::GeneralKnowledge, DifficultyLevel::Easy, [q.clone()]);
        assert_eq!(
            catalog.corpus(QuizDomain::GeneralKnowledge, DifficultyLevel::Easy),
            &[q]
        );
        assert!(!catalog.is_empty());
    }
}
