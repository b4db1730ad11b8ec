//! Generate command
//!
//! Produces sequences without playing, with example answers for each.

use crate::generator::{Generation, RandomSource, SequenceGenerator, SupportCache};

/// One generated sequence and some words that solve it
#[derive(Debug, Clone)]
pub struct GeneratedSequence {
    pub generation: Generation,
    pub examples: Vec<String>,
}

/// Generate `count` sequences, sharing one support cache across them
pub fn run_generate<C, R>(
    generator: &mut SequenceGenerator<'_, C>,
    rng: &mut R,
    count: usize,
    examples: usize,
) -> Vec<GeneratedSequence>
where
    C: SupportCache,
    R: RandomSource + ?Sized,
{
    (0..count)
        .map(|_| {
            let generation = generator.generate_detailed(rng);
            let examples = generator
                .pool()
                .find_example_answers(generation.sequence.as_str(), examples)
                .into_iter()
                .map(|w| w.text().to_string())
                .collect();
            GeneratedSequence {
                generation,
                examples,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CandidatePool;
    use crate::generator::{FORBIDDEN_FINAL_LETTERS, RngSource};
    use crate::wordlists::WORDS;

    #[test]
    fn generates_requested_count() {
        let pool = CandidatePool::build(WORDS.iter());
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(3);

        let results = run_generate(&mut generator, &mut rng, 5, 2);
        assert_eq!(results.len(), 5);
        for result in &results {
            assert!(result.examples.len() <= 2);
            assert!(!FORBIDDEN_FINAL_LETTERS.contains(&result.generation.sequence.last()));
            for example in &result.examples {
                assert!(result.generation.sequence.is_contained_in(example));
            }
        }
    }

    #[test]
    fn sampled_sequences_always_have_examples() {
        let pool = CandidatePool::build(WORDS.iter());
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(19);

        for result in run_generate(&mut generator, &mut rng, 10, 3) {
            if !result.generation.is_fallback() {
                assert!(!result.examples.is_empty());
            }
        }
    }

    #[test]
    fn zero_examples_requested() {
        let pool = CandidatePool::build(["plain", "link"]);
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(1);

        let results = run_generate(&mut generator, &mut rng, 2, 0);
        assert!(results.iter().all(|r| r.examples.is_empty()));
    }
}
