//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::{REVEALED_ANSWERS, Session};
use crate::generator::RandomSource;
use crate::output::{print_outcome, print_round_end, print_round_start, print_stats};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::runtime::Runtime;

/// Run the simple interactive CLI mode
///
/// Each guess is checked to completion before the next prompt, so lookups for
/// one round never overlap.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: RandomSource>(
    session: &mut Session<'_, R>,
    runtime: &Runtime,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Sequence Puzzle - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round shows three letters. Type words that contain them in order.");
    println!("You get 5 guesses. Each valid word scores its length, +3 if in the first 10s.\n");
    println!("Commands: ':end' to end the round, ':new' for new round, ':stats', ':quit'\n");

    'rounds: loop {
        session.begin();
        print_round_start(session.round());

        while !session.round().is_over() {
            let Some(input) = get_user_input("Guess")? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match input.as_str() {
                ":quit" | ":q" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                ":new" | ":n" => {
                    session.new_round();
                    println!("\n🔄 New round!");
                    continue 'rounds;
                }
                ":end" | ":e" => session.end_early(),
                ":stats" | ":s" => print_stats(session.state()),
                word => {
                    let outcome = runtime.block_on(session.submit(word));
                    print_outcome(&outcome, session.round());
                }
            }
        }

        print_round_end(session.round(), &session.example_answers(REVEALED_ANSWERS));
        let stats = session.stats();
        println!(
            "   Streak: {}  |  Played: {}  |  Best: {}\n",
            stats.current_streak.to_string().bright_cyan(),
            stats.games_played,
            stats.highest_scores.first().copied().unwrap_or_default()
        );

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" | "" => session.new_round(),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
