use std::sync::Arc;

use quiz_core::model::{DifficultyLevel, QuestionOrigin, QuestionSpec, QuizDomain};
use quiz_core::{BankSampler, CorpusProvider, ProceduralGenerator};
use rand::Rng;

/// Picks the question strategy for a domain: generated for Math, sampled
/// from the corpus for bank domains.
#[derive(Clone)]
pub struct QuestionSource {
    corpus: Arc<dyn CorpusProvider>,
    generator: ProceduralGenerator,
    sampler: BankSampler,
}

impl QuestionSource {
    #[must_use]
    pub fn new(corpus: Arc<dyn CorpusProvider>) -> Self {
        Self {
            corpus,
            generator: ProceduralGenerator::new(),
            sampler: BankSampler::new(),
        }
    }

    /// Up to `count` questions for `domain` at `level`.
    ///
    /// Bank domains return fewer when the corpus is smaller than `count`.
    #[must_use]
    pub fn questions(
        &self,
        domain: QuizDomain,
        level: DifficultyLevel,
        count: usize,
    ) -> Vec<QuestionSpec> {
        self.questions_with(&mut rand::rng(), domain, level, count)
    }

    pub fn questions_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        domain: QuizDomain,
        level: DifficultyLevel,
        count: usize,
    ) -> Vec<QuestionSpec> {
        match domain.origin() {
            QuestionOrigin::Procedural => self.generator.generate_with(rng, level, count),
            QuestionOrigin::Bank => {
                self.sampler
                    .sample_with(rng, self.corpus.corpus(domain, level), count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::CorpusCatalog;

    #[test]
    fn routes_math_to_generator_and_banks_to_sampler() {
        let source = QuestionSource::new(Arc::new(CorpusCatalog::builtin()));

        let math = source.questions(QuizDomain::Math, DifficultyLevel::Hard, 4);
        assert_eq!(math.len(), 4);
        assert!(math.iter().all(|q| !q.is_choice()));

        let geo = source.questions(QuizDomain::Geography, DifficultyLevel::Easy, 4);
        assert_eq!(geo.len(), 4);
        assert!(geo.iter().all(QuestionSpec::is_choice));
    }

    #[test]
    fn bank_request_is_truncated_to_corpus() {
        let source = QuestionSource::new(Arc::new(CorpusCatalog::builtin()));
        let all = source.questions(QuizDomain::Geography, DifficultyLevel::Expert, 100);
        assert_eq!(all.len(), 11);

        let empty = QuestionSource::new(Arc::new(CorpusCatalog::empty()));
        assert!(
            empty
                .questions(QuizDomain::GeneralKnowledge, DifficultyLevel::Easy, 5)
                .is_empty()
        );
    }
}
