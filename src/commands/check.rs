//! Check command
//!
//! Runs a single word through the validity gate.

use crate::core::{Sequence, SequenceError};
use crate::game::{ValidityGate, Verdict};

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub word: String,
    pub sequence: Sequence,
    pub verdict: Verdict,
    /// Which lookup gave the final answer
    pub lookup: String,
}

/// Check `word` against `sequence`
///
/// # Errors
///
/// Returns an error if `sequence` is not exactly three letters.
pub async fn check_word(
    gate: &ValidityGate,
    word: &str,
    sequence: &str,
) -> Result<CheckResult, SequenceError> {
    let sequence: Sequence = sequence.parse()?;
    let verdict = gate.check(word, &sequence).await;

    Ok(CheckResult {
        word: word.trim().to_string(),
        sequence,
        verdict,
        lookup: gate.lookup_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::LocalLookup;
    use crate::game::Rejection;

    fn gate() -> ValidityGate {
        ValidityGate::new(LocalLookup::new(["plain", "link", "nail"]))
    }

    #[tokio::test]
    async fn valid_word() {
        let result = check_word(&gate(), "plain", "lin").await.unwrap();
        assert_eq!(result.verdict, Verdict::Valid);
        assert_eq!(result.sequence.as_str(), "LIN");
        assert_eq!(result.lookup, "local");
    }

    #[tokio::test]
    async fn out_of_order_word() {
        let result = check_word(&gate(), "nail", "LIN").await.unwrap();
        assert!(matches!(
            result.verdict,
            Verdict::Invalid(Rejection::OutOfOrder(_))
        ));
    }

    #[tokio::test]
    async fn bad_sequence_is_an_error() {
        assert!(check_word(&gate(), "plain", "LINK").await.is_err());
        assert!(check_word(&gate(), "plain", "L1N").await.is_err());
    }
}
