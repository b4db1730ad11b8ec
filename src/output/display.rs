//! Display functions for command results

use super::formatters::{create_progress_bar, guess_points, percent, spaced_letters};
use crate::commands::{AnswersResult, BenchmarkResult, CheckResult, GeneratedSequence};
use crate::core::Word;
use crate::game::{GUESSES_PER_ROUND, Rejection, Round, StoredState, SubmitOutcome, Verdict};
use crate::generator::{Difficulty, Origin};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print generated sequences with their tier and example answers
pub fn print_generated(results: &[GeneratedSequence]) {
    banner("GENERATED SEQUENCES");

    for (i, result) in results.iter().enumerate() {
        let generation = &result.generation;
        let tier = match generation.tier.difficulty {
            Difficulty::Hard => "hard".red(),
            Difficulty::Easy => "easy".green(),
        };
        let origin = match generation.origin {
            Origin::Sampled { support, cached } => {
                let cached = if cached { " (cached)" } else { "" };
                format!("support {support}{cached}")
            }
            Origin::Fallback => "random fallback".yellow().to_string(),
        };

        println!(
            "\n{:>3}. {}  [{}] {} after {} attempts",
            i + 1,
            spaced_letters(&generation.sequence).bright_yellow().bold(),
            tier,
            origin,
            generation.attempts
        );
        if !result.examples.is_empty() {
            println!("     e.g. {}", result.examples.join(", ").bright_white());
        }
    }
    println!();
}

/// Print the verdict of a single check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} against {} (lookup: {})",
        result.word.to_uppercase().bright_white().bold(),
        result.sequence.as_str().bright_yellow().bold(),
        result.lookup
    );
    match result.verdict {
        Verdict::Valid => println!("{}", "✅ Valid word".green().bold()),
        Verdict::Invalid(reason) => println!("{}", format!("❌ {reason}").red().bold()),
    }
}

/// Print example answers for a sequence
pub fn print_answers(result: &AnswersResult) {
    let Some(sequence) = result.sequence else {
        println!(
            "{}",
            format!("'{}' is not a three-letter sequence", result.query).red()
        );
        return;
    };

    println!(
        "\n{} words contain {} in order",
        result.total.to_string().bright_cyan().bold(),
        spaced_letters(&sequence).bright_yellow().bold()
    );
    for answer in &result.answers {
        println!("  • {answer}");
    }
}

/// Print persisted statistics
pub fn print_stats(state: &StoredState) {
    let stats = &state.stats;
    let last = state.last_round.as_ref();
    banner("STATISTICS");

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win rate:        {}", percent(stats.win_rate()).bright_yellow());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n🏆 {}", "Highest scores:".bright_cyan().bold());
    let max_score = stats.highest_scores.first().copied().unwrap_or(1).max(1);
    for (i, &score) in stats.highest_scores.iter().enumerate() {
        let bar = create_progress_bar(score as f64, max_score as f64, 30);
        let line = format!("   {}. {bar} {score}", i + 1);
        if last.is_some_and(|l| l.score == score) {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }

    println!("\n📈 {}", "Mistakes per round:".bright_cyan().bold());
    let max_count = stats.mistakes.iter().copied().max().unwrap_or(1).max(1);
    for (mistakes, &count) in stats.mistakes.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), 30);
        let line = format!("   {mistakes}: {bar} {count}");
        if last.is_some_and(|l| l.mistakes == mistakes) {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }

    println!("\n📏 {}", "Longest words:".bright_cyan().bold());
    for (i, entry) in stats.longest_words.iter().enumerate() {
        let line = format!("   {}. {} ({})", i + 1, entry.word.to_uppercase(), entry.length);
        if last.is_some_and(|l| l.words.contains(&entry.word)) {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Sequences:        {}", result.total);
    println!("   Distinct:         {}", result.distinct_sequences);
    println!(
        "   Tier mix:         {} hard / {} easy",
        result.hard.to_string().red(),
        result.easy.to_string().green()
    );
    println!(
        "   Fallback rate:    {}",
        percent(result.fallback_rate()).bright_yellow().bold()
    );
    println!("   Cached accepts:   {}", result.cache_hits);
    println!("   Cache entries:    {}", result.cache_size);
    println!(
        "   Attempts:         {:.1} avg, {} max",
        result.average_attempts, result.max_attempts
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sequences/second: {:.1}", result.sequences_per_second);
}

/// Print the letters at the start of a round
pub fn print_round_start(round: &Round) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Find words containing  {}  in order",
        spaced_letters(&round.sequence()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of one submission
pub fn print_outcome(outcome: &SubmitOutcome, round: &Round) {
    match outcome {
        SubmitOutcome::Accepted { length, bonus } => {
            let bonus = if *bonus > 0 {
                format!(" +{bonus} time bonus")
            } else {
                String::new()
            };
            println!("{}", format!("✓ +{length}{bonus}").green().bold());
        }
        SubmitOutcome::Rejected(reason) => println!("{}", format!("✗ {reason}").red()),
        SubmitOutcome::AlreadyGuessed => println!("{}", "Already guessed".yellow()),
        SubmitOutcome::Empty => println!("{}", Rejection::Empty.to_string().yellow()),
        SubmitOutcome::RoundOver => println!("{}", "The round is over".yellow()),
    }
    if !round.is_over() {
        println!(
            "   Score: {}  |  Guesses left: {}/{GUESSES_PER_ROUND}",
            round.score().to_string().bright_cyan(),
            round.remaining()
        );
    }
}

/// Print the end-of-round summary with example answers
pub fn print_round_end(round: &Round, examples: &[&Word]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("   Round over: {} points", round.score())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    for (i, guess) in round.guesses().iter().enumerate() {
        let text = format!("{:<14}", guess.text.to_uppercase());
        let text = if guess.valid {
            text.bright_white().bold()
        } else {
            text.bright_black()
        };
        println!(
            "   {}. {} {}",
            (i + 1).to_string().bright_black(),
            text,
            guess_points(guess)
        );
    }

    if !examples.is_empty() {
        let examples: Vec<&str> = examples.iter().map(|w| w.text()).collect();
        println!("\n   Possible answers: {}", examples.join(", ").bright_yellow());
    }
    println!();
}
