//! Formatting utilities for terminal output

use crate::core::Sequence;
use crate::game::Guess;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Sequence letters spread out for display, e.g. `L · I · N`
#[must_use]
pub fn spaced_letters(sequence: &Sequence) -> String {
    sequence
        .as_str()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Points column for a guess: `+5`, `+5 +3` with a bonus, `x` if it scored nothing
#[must_use]
pub fn guess_points(guess: &Guess) -> String {
    match guess.length {
        Some(len) if guess.bonus > 0 => format!("+{len} +{}", guess.bonus),
        Some(len) => format!("+{len}"),
        None => "x".to_string(),
    }
}

/// Ratio as a whole percentage
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
