//! Candidate pool construction and answer lookup

use crate::core::{MIN_WORD_LEN, Sequence, Word};

/// Common inflection suffixes excluded from the pool
///
/// Removing these keeps generated sequences from collapsing into trivial
/// plural, past tense or gerund completions.
pub const EXCLUDED_SUFFIXES: &[&str] = &["ING", "ED", "S", "ER", "EST", "LY", "ISH"];

/// Inclusion policy for the candidate pool
#[derive(Debug, Clone)]
pub struct PoolPolicy {
    /// Minimum word length (inclusive)
    pub min_len: usize,
    /// Uppercase suffixes that exclude a word
    pub excluded_suffixes: Vec<String>,
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            excluded_suffixes: EXCLUDED_SUFFIXES.iter().map(|&s| s.to_string()).collect(),
        }
    }
}

impl PoolPolicy {
    /// Apply the inclusion predicate to one raw entry
    ///
    /// Returns the normalized word if it is alphabetic, long enough and does
    /// not end in an excluded suffix.
    #[must_use]
    pub fn admit(&self, raw: &str) -> Option<Word> {
        let word = Word::new(raw).ok()?;
        if word.len() < self.min_len {
            return None;
        }
        if self
            .excluded_suffixes
            .iter()
            .any(|suffix| word.ends_with(suffix))
        {
            return None;
        }
        Some(word)
    }
}

/// The filtered, normalized dictionary
///
/// Order follows the source so results are reproducible.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Build the pool with the default policy
    ///
    /// Malformed entries are skipped; an empty source yields an empty pool.
    ///
    /// # Examples
    /// ```
    /// use sequence_puzzle::dictionary::CandidatePool;
    ///
    /// let pool = CandidatePool::build(["plain", "walking", "cats", "ox", "crate"]);
    /// let words: Vec<&str> = pool.words().iter().map(|w| w.text()).collect();
    /// assert_eq!(words, vec!["PLAIN", "CRATE"]);
    /// ```
    pub fn build<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::build_with(raw, &PoolPolicy::default())
    }

    /// Build the pool with an explicit policy
    pub fn build_with<I>(raw: I, policy: &PoolPolicy) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words: Vec<Word> = raw
            .into_iter()
            .filter_map(|entry| policy.admit(entry.as_ref()))
            .collect();

        tracing::debug!(size = words.len(), "candidate pool built");
        Self { words }
    }

    /// All pool words in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pool words of at least `min_len` letters
    #[must_use]
    pub fn words_at_least(&self, min_len: usize) -> Vec<&Word> {
        self.words.iter().filter(|w| w.len() >= min_len).collect()
    }

    /// Count pool words containing `sequence` in order
    #[must_use]
    pub fn count_containing(&self, sequence: &Sequence) -> usize {
        self.words
            .iter()
            .filter(|w| sequence.is_contained_in(w.text()))
            .count()
    }

    /// Find up to `max` example answers for a sequence
    ///
    /// Matches are sorted by length, then alphabetically. A query that is not
    /// exactly three letters returns no answers.
    #[must_use]
    pub fn find_example_answers(&self, sequence: &str, max: usize) -> Vec<&Word> {
        let Some(sequence) = Sequence::parse(sequence) else {
            return Vec::new();
        };

        let mut matches: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| sequence.is_contained_in(w.text()))
            .collect();
        matches.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.text().cmp(b.text())));
        matches.truncate(max);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    #[test]
    fn build_filters_and_normalizes() {
        let pool = CandidatePool::build(["plain", "Link", "ox", "self-made", "r2d2", "crate"]);
        assert_eq!(texts(pool.words()), vec!["PLAIN", "LINK", "CRATE"]);
    }

    #[test]
    fn build_excludes_suffixes() {
        let raw = [
            "walking", "jumped", "cats", "builder", "fastest", "quickly", "reddish", "table",
        ];
        let pool = CandidatePool::build(raw);
        assert_eq!(texts(pool.words()), vec!["TABLE"]);
    }

    #[test]
    fn build_suffix_check_is_case_insensitive() {
        let pool = CandidatePool::build(["WALKING", "Painted", "Boxes"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn every_member_satisfies_inclusion_predicate() {
        let raw = crate::wordlists::WORDS;
        let pool = CandidatePool::build(raw.iter());
        assert!(!pool.is_empty());

        for word in pool.words() {
            assert!(word.len() >= 3);
            assert!(word.bytes().iter().all(u8::is_ascii_uppercase));
            assert!(
                EXCLUDED_SUFFIXES.iter().all(|s| !word.ends_with(s)),
                "{word} ends with an excluded suffix"
            );
        }
    }

    #[test]
    fn empty_source_gives_empty_pool() {
        let pool = CandidatePool::build(Vec::<String>::new());
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn custom_policy() {
        let policy = PoolPolicy {
            min_len: 5,
            excluded_suffixes: vec!["NK".to_string()],
        };
        let pool = CandidatePool::build_with(["plain", "link", "clink", "linen", "cats"], &policy);
        assert_eq!(texts(pool.words()), vec!["PLAIN", "LINEN"]);
    }

    #[test]
    fn words_at_least_filters_by_length() {
        let pool = CandidatePool::build(["plain", "link", "nail", "mountain"]);
        assert_eq!(texts(pool.words_at_least(5)), vec!["PLAIN", "MOUNTAIN"]);
        assert_eq!(pool.words_at_least(9).len(), 0);
    }

    #[test]
    fn find_example_answers_sorted_by_length_then_alpha() {
        let pool = CandidatePool::build(["PLAIN", "LINK", "CLINK", "LINEN"]);
        assert_eq!(texts(pool.find_example_answers("LIN", 2)), vec!["LINK", "CLINK"]);
        assert_eq!(
            texts(pool.find_example_answers("lin", 10)),
            vec!["LINK", "CLINK", "LINEN", "PLAIN"]
        );
    }

    #[test]
    fn find_example_answers_excludes_out_of_order() {
        let pool = CandidatePool::build(["PLAIN", "LINK", "NAIL", "CRATE"]);
        assert_eq!(texts(pool.find_example_answers("LIN", 5)), vec!["LINK", "PLAIN"]);
    }

    #[test]
    fn find_example_answers_malformed_query_is_empty() {
        let pool = CandidatePool::build(["PLAIN", "LINK"]);
        assert!(pool.find_example_answers("LI", 2).is_empty());
        assert!(pool.find_example_answers("LINK", 2).is_empty());
        assert!(pool.find_example_answers("", 2).is_empty());
        assert!(pool.find_example_answers("L1N", 2).is_empty());
    }

    #[test]
    fn find_example_answers_zero_max() {
        let pool = CandidatePool::build(["PLAIN", "LINK"]);
        assert!(pool.find_example_answers("LIN", 0).is_empty());
    }

    #[test]
    fn count_containing_scans_whole_pool() {
        let pool = CandidatePool::build(["PLAIN", "LINK", "NAIL", "CRATE"]);
        let seq = Sequence::parse("LIN").unwrap();
        assert_eq!(pool.count_containing(&seq), 2);
    }
}
