//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_answers, print_benchmark_result, print_check_result, print_generated, print_outcome,
    print_round_end, print_round_start, print_stats,
};
