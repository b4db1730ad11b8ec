//! Random source abstraction
//!
//! Generation draws through [`RandomSource`] instead of a global RNG so tests
//! can substitute a seeded or scripted source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform draws used by the generator
pub trait RandomSource {
    /// Uniform index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

/// Adapter from any `rand` RNG
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local, OS-seeded source
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Replays scripted draws, then falls back to zeros
///
/// Index values are reduced modulo `len` so any script stays in range.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
    pub draws: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            units: units.iter().copied().collect(),
            draws: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.indices.pop_front().unwrap_or(0) % len
    }

    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.units.pop_front().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);

        let draws_a: Vec<usize> = (0..20).map(|_| a.index(1000)).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.index(1000)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn index_stays_in_range() {
        let mut rng = RngSource::thread();
        for len in 1..50 {
            assert!(rng.index(len) < len);
        }
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn scripted_source_replays_then_zeroes() {
        let mut src = ScriptedSource::new(&[3, 12], &[0.5]);
        assert_eq!(src.index(10), 3);
        assert_eq!(src.index(10), 2);
        assert_eq!(src.index(10), 0);
        assert!((src.unit() - 0.5).abs() < f64::EPSILON);
        assert!(src.unit().abs() < f64::EPSILON);
        assert_eq!(src.draws, 5);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn draw(mut src: impl RandomSource) -> usize {
            src.index(5)
        }
        let mut src = ScriptedSource::new(&[4], &[]);
        assert_eq!(draw(&mut src), 4);
        assert_eq!(src.draws, 1);
    }
}
