//! Answers command

use crate::core::Sequence;
use crate::dictionary::CandidatePool;

/// Example answers for a sequence
#[derive(Debug, Clone)]
pub struct AnswersResult {
    /// The query as typed
    pub query: String,
    /// `None` when the query is not exactly three letters
    pub sequence: Option<Sequence>,
    /// Shortest answers, up to the requested maximum
    pub answers: Vec<String>,
    /// Every pool word containing the sequence
    pub total: usize,
}

/// Find up to `max` answers for `query` in the pool
#[must_use]
pub fn find_answers(pool: &CandidatePool, query: &str, max: usize) -> AnswersResult {
    let sequence = Sequence::parse(query);
    let answers = pool
        .find_example_answers(query, max)
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();
    let total = sequence.map_or(0, |s| pool.count_containing(&s));

    AnswersResult {
        query: query.to_string(),
        sequence,
        answers,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sorted_answers_and_total() {
        let pool = CandidatePool::build(["plain", "link", "nail", "crate", "linen"]);
        let result = find_answers(&pool, "lin", 2);

        assert_eq!(result.sequence, Sequence::parse("LIN"));
        assert_eq!(result.answers, vec!["LINK", "LINEN"]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn malformed_query_is_empty() {
        let pool = CandidatePool::build(["plain", "link"]);
        let result = find_answers(&pool, "li", 5);

        assert!(result.sequence.is_none());
        assert!(result.answers.is_empty());
        assert_eq!(result.total, 0);
    }
}
