//! Sequence generator

use super::cache::{MemoryCache, SupportCache};
use super::policy::{GeneratorPolicy, Tier};
use super::random::RandomSource;
use crate::core::{SEQUENCE_LEN, Sequence, Word};
use crate::dictionary::CandidatePool;
use rayon::prelude::*;

/// Samples at least this large are counted on the rayon pool
const PARALLEL_COUNT_THRESHOLD: usize = 2048;

/// Where a generated sequence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Drawn from a dictionary word and accepted on its support estimate
    Sampled {
        support: usize,
        /// The estimate came from the cache
        cached: bool,
    },
    /// No qualifying sequence within the attempt bound; random letters
    Fallback,
}

/// A generated sequence with how it was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    pub sequence: Sequence,
    pub tier: Tier,
    pub origin: Origin,
    /// Sampling attempts consumed (the full bound on fallback)
    pub attempts: usize,
}

impl Generation {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback)
    }
}

/// Produces one sequence per round from a candidate pool
///
/// Owns the support cache, so estimates are shared across every round the
/// generator produces.
pub struct SequenceGenerator<'a, C: SupportCache = MemoryCache> {
    pool: &'a CandidatePool,
    policy: GeneratorPolicy,
    cache: C,
}

impl<'a> SequenceGenerator<'a, MemoryCache> {
    /// Create a generator with the default policy and a private cache
    #[must_use]
    pub fn new(pool: &'a CandidatePool) -> Self {
        Self::with_policy(pool, GeneratorPolicy::default())
    }

    #[must_use]
    pub fn with_policy(pool: &'a CandidatePool, policy: GeneratorPolicy) -> Self {
        Self::with_cache(pool, policy, MemoryCache::new())
    }
}

impl<'a, C: SupportCache> SequenceGenerator<'a, C> {
    /// Create a generator with an explicit cache (e.g. a `SharedCache` clone)
    pub const fn with_cache(pool: &'a CandidatePool, policy: GeneratorPolicy, cache: C) -> Self {
        Self {
            pool,
            policy,
            cache,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &GeneratorPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    #[must_use]
    pub const fn pool(&self) -> &'a CandidatePool {
        self.pool
    }

    /// Generate a sequence for a new round
    ///
    /// Never fails: exhausting the attempt bound (or an empty pool) falls back
    /// to random letters.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Sequence {
        self.generate_detailed(rng).sequence
    }

    /// Generate a sequence and report its tier, origin and attempt count
    pub fn generate_detailed<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Generation {
        let pool = self.pool;
        let tier = self.policy.choose_tier(rng);
        let candidates = pool.words_at_least(tier.min_word_len);

        let mut attempts = 0;
        if !candidates.is_empty() {
            while attempts < self.policy.max_attempts {
                attempts += 1;

                let word = candidates[rng.index(candidates.len())];
                let Some(sequence) = draw_sequence(word, rng) else {
                    continue;
                };

                if self.policy.is_forbidden_final(sequence.last()) {
                    continue;
                }

                // Must need padding letters, not spell out a substring
                if sequence.is_substring_of(word.text()) {
                    continue;
                }

                let (support, cached) = match self.cache.get(&sequence) {
                    Some(count) => (count, true),
                    None => {
                        let sample_size = self.policy.sample_size;
                        let count = self.cache.get_or_compute(sequence, || {
                            estimate_support(&sequence, &candidates, sample_size, rng)
                        });
                        (count, false)
                    }
                };

                if support >= tier.min_support {
                    tracing::debug!(
                        %sequence,
                        source = %word,
                        support,
                        cached,
                        attempts,
                        tier = %tier.difficulty,
                        "sequence accepted"
                    );
                    return Generation {
                        sequence,
                        tier,
                        origin: Origin::Sampled { support, cached },
                        attempts,
                    };
                }
            }
        }

        let sequence = fallback_sequence(rng, &self.policy.forbidden_final);
        tracing::warn!(
            %sequence,
            attempts,
            pool = candidates.len(),
            tier = %tier.difficulty,
            "no qualifying sequence found, using random letters"
        );

        Generation {
            sequence,
            tier,
            origin: Origin::Fallback,
            attempts,
        }
    }

    /// Memoized support estimate for `sequence` within `tier`'s word pool
    ///
    /// The first call samples and stores the count; later calls return the
    /// stored count without drawing from `rng`.
    pub fn support<R: RandomSource + ?Sized>(
        &mut self,
        sequence: &Sequence,
        tier: Tier,
        rng: &mut R,
    ) -> usize {
        if let Some(count) = self.cache.get(sequence) {
            return count;
        }

        let pool = self.pool;
        let candidates = pool.words_at_least(tier.min_word_len);
        let sample_size = self.policy.sample_size;
        self.cache.get_or_compute(*sequence, || {
            estimate_support(sequence, &candidates, sample_size, rng)
        })
    }
}

/// Draw three strictly increasing positions from `word` and read their letters
///
/// The first position leaves room for two more letters, the second for one.
/// Returns `None` only for words shorter than three letters.
fn draw_sequence<R: RandomSource + ?Sized>(word: &Word, rng: &mut R) -> Option<Sequence> {
    let bytes = word.bytes();
    let len = bytes.len();
    if len < SEQUENCE_LEN {
        return None;
    }

    let first = rng.index(len - 2);
    let second = first + 1 + rng.index(len - first - 2);
    let third = second + 1 + rng.index(len - second - 1);

    Sequence::from_letters([bytes[first], bytes[second], bytes[third]])
}

/// Estimate how many tier words contain `sequence`
///
/// Pools larger than `sample_size` are sampled with replacement; smaller pools
/// are counted exactly.
pub fn estimate_support<R: RandomSource + ?Sized>(
    sequence: &Sequence,
    candidates: &[&Word],
    sample_size: usize,
    rng: &mut R,
) -> usize {
    if candidates.len() > sample_size {
        let sample: Vec<&Word> = (0..sample_size)
            .map(|_| candidates[rng.index(candidates.len())])
            .collect();
        count_containing(sequence, &sample)
    } else {
        count_containing(sequence, candidates)
    }
}

fn count_containing(sequence: &Sequence, words: &[&Word]) -> usize {
    if words.len() >= PARALLEL_COUNT_THRESHOLD {
        words
            .par_iter()
            .filter(|w| sequence.is_contained_in(w.text()))
            .count()
    } else {
        words
            .iter()
            .filter(|w| sequence.is_contained_in(w.text()))
            .count()
    }
}

/// Build a sequence of three distinct random letters
///
/// The final letter is never one of `forbidden_final`, unless that list
/// leaves no letter for the last slot, in which case it is ignored. Each
/// letter is drawn uniformly from the letters still allowed, so this always
/// takes exactly three draws.
pub fn fallback_sequence<R: RandomSource + ?Sized>(
    rng: &mut R,
    forbidden_final: &[u8],
) -> Sequence {
    let mut letters = [b'A'; SEQUENCE_LEN];

    for position in 0..SEQUENCE_LEN {
        let chosen = &letters[..position];
        let unused: Vec<u8> = (b'A'..=b'Z').filter(|letter| !chosen.contains(letter)).collect();
        let mut allowed = unused.clone();
        if position + 1 == SEQUENCE_LEN {
            allowed.retain(|letter| {
                !forbidden_final.iter().any(|f| f.eq_ignore_ascii_case(letter))
            });
            if allowed.is_empty() {
                tracing::warn!("every final letter is forbidden; ignoring the restriction");
                allowed = unused;
            }
        }
        letters[position] = allowed[rng.index(allowed.len())];
    }

    // Always three uppercase letters
    Sequence::from_letters(letters).unwrap_or_else(|| unreachable!("letters drawn from A-Z"))
}
