//! Sequence-support cache
//!
//! Support estimates are expensive (thousands of subsequence checks), so each
//! sequence's count is memoized for the life of the process. Entries are never
//! evicted or invalidated.

use crate::core::Sequence;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Memo of support counts keyed by sequence
pub trait SupportCache {
    /// Previously stored count for `sequence`
    fn get(&self, sequence: &Sequence) -> Option<usize>;

    /// Store the count for `sequence`
    fn put(&mut self, sequence: Sequence, count: usize);

    /// Number of memoized sequences
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the stored count, computing and storing it on a miss
    ///
    /// Implementations shared across threads override this so the
    /// read-compute-write happens under one lock.
    fn get_or_compute<F>(&mut self, sequence: Sequence, compute: F) -> usize
    where
        F: FnOnce() -> usize,
    {
        if let Some(count) = self.get(&sequence) {
            return count;
        }
        let count = compute();
        self.put(sequence, count);
        count
    }
}

/// Single-owner in-memory cache
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    counts: FxHashMap<Sequence, usize>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupportCache for MemoryCache {
    fn get(&self, sequence: &Sequence) -> Option<usize> {
        self.counts.get(sequence).copied()
    }

    fn put(&mut self, sequence: Sequence, count: usize) {
        self.counts.insert(sequence, count);
    }

    fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Cache shared between generators on different threads
///
/// Clones share one map behind a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedCache {
    counts: Arc<Mutex<FxHashMap<Sequence, usize>>>,
}

impl SharedCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<Sequence, usize>> {
        // A panicking holder cannot leave a half-written count behind
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SupportCache for SharedCache {
    fn get(&self, sequence: &Sequence) -> Option<usize> {
        self.lock().get(sequence).copied()
    }

    fn put(&mut self, sequence: Sequence, count: usize) {
        self.lock().insert(sequence, count);
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn get_or_compute<F>(&mut self, sequence: Sequence, compute: F) -> usize
    where
        F: FnOnce() -> usize,
    {
        let mut counts = self.lock();
        *counts.entry(sequence).or_insert_with(compute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn seq(text: &str) -> Sequence {
        Sequence::parse(text).unwrap()
    }

    #[test]
    fn memory_cache_get_put() {
        let mut cache = MemoryCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&seq("LIN")), None);

        cache.put(seq("LIN"), 7);
        assert_eq!(cache.get(&seq("LIN")), Some(7));
        assert_eq!(cache.get(&seq("NIL")), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_counts_are_remembered() {
        let mut cache = MemoryCache::new();
        cache.put(seq("QZX"), 0);
        assert_eq!(cache.get(&seq("QZX")), Some(0));
    }

    #[test]
    fn get_or_compute_runs_once() {
        let mut cache = MemoryCache::new();
        let mut calls = 0;

        let first = cache.get_or_compute(seq("ABC"), || {
            calls += 1;
            4
        });
        let second = cache.get_or_compute(seq("ABC"), || {
            calls += 1;
            99
        });

        assert_eq!((first, second), (4, 4));
        assert_eq!(calls, 1);
    }

    #[test]
    fn shared_cache_clones_share_entries() {
        let mut a = SharedCache::new();
        let b = a.clone();
        a.put(seq("LIN"), 3);
        assert_eq!(b.get(&seq("LIN")), Some(3));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn shared_cache_first_writer_wins_across_threads() {
        let cache = SharedCache::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mut cache = cache.clone();
                thread::spawn(move || cache.get_or_compute(seq("RTE"), || i))
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Every thread observes the same stored count
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cache.len(), 1);
    }
}
