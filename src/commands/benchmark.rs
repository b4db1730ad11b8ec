//! Benchmark command
//!
//! Measures generation throughput and how often each path is taken.

use crate::generator::{Difficulty, Origin, RandomSource, SequenceGenerator, SupportCache};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total: usize,
    pub hard: usize,
    pub easy: usize,
    pub fallbacks: usize,
    /// Accepted sequences whose support came from the cache
    pub cache_hits: usize,
    pub distinct_sequences: usize,
    pub cache_size: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
    pub duration: Duration,
    pub sequences_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn fallback_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.fallbacks as f64 / self.total as f64
        }
    }
}

/// Progress bar in the house style
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Generate `count` sequences and collect timing and path statistics
///
/// Pass a progress bar to have it advanced once per sequence.
pub fn run_benchmark<C, R>(
    generator: &mut SequenceGenerator<'_, C>,
    rng: &mut R,
    count: usize,
    progress: Option<&ProgressBar>,
) -> BenchmarkResult
where
    C: SupportCache,
    R: RandomSource + ?Sized,
{
    let start = Instant::now();
    let mut hard = 0;
    let mut fallbacks = 0;
    let mut cache_hits = 0;
    let mut total_attempts = 0;
    let mut max_attempts = 0;
    let mut distinct = FxHashSet::default();

    for i in 0..count {
        let generation = generator.generate_detailed(rng);

        if generation.tier.difficulty == Difficulty::Hard {
            hard += 1;
        }
        match generation.origin {
            Origin::Fallback => fallbacks += 1,
            Origin::Sampled { cached: true, .. } => cache_hits += 1,
            Origin::Sampled { .. } => {}
        }
        total_attempts += generation.attempts;
        max_attempts = max_attempts.max(generation.attempts);
        distinct.insert(generation.sequence);

        if let Some(pb) = progress {
            if i % 10 == 0 {
                pb.set_message(format!("Fallbacks: {fallbacks}"));
            }
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Complete!");
    }

    let duration = start.elapsed();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total: count,
        hard,
        easy: count - hard,
        fallbacks,
        cache_hits,
        distinct_sequences: distinct.len(),
        cache_size: generator.cache().len(),
        average_attempts: if count == 0 {
            0.0
        } else {
            total_attempts as f64 / count as f64
        },
        max_attempts,
        duration,
        sequences_per_second: if seconds > 0.0 {
            count as f64 / seconds
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CandidatePool;
    use crate::generator::RngSource;
    use crate::wordlists::WORDS;

    #[test]
    fn benchmark_counts_add_up() {
        let pool = CandidatePool::build(WORDS.iter());
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(10);

        let result = run_benchmark(&mut generator, &mut rng, 20, None);

        assert_eq!(result.total, 20);
        assert_eq!(result.hard + result.easy, 20);
        assert!(result.fallbacks <= 20);
        assert!(result.distinct_sequences <= 20);
        assert!(result.average_attempts >= 1.0 || result.fallbacks > 0);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn benchmark_empty_pool_always_falls_back() {
        let pool = CandidatePool::default();
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(2);

        let result = run_benchmark(&mut generator, &mut rng, 5, None);

        assert_eq!(result.fallbacks, 5);
        assert!((result.fallback_rate() - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.cache_size, 0);
        assert_eq!(result.max_attempts, 0);
    }

    #[test]
    fn benchmark_zero_count() {
        let pool = CandidatePool::build(["plain"]);
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(2);

        let result = run_benchmark(&mut generator, &mut rng, 0, None);
        assert_eq!(result.total, 0);
        assert!(result.fallback_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_advances_progress_bar() {
        let pool = CandidatePool::build(["plain", "link"]);
        let mut generator = SequenceGenerator::new(&pool);
        let mut rng = RngSource::seeded(4);
        let pb = ProgressBar::hidden();

        run_benchmark(&mut generator, &mut rng, 3, Some(&pb));
        assert_eq!(pb.position(), 3);
    }
}
