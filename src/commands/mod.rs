//! Command implementations

pub mod answers;
pub mod benchmark;
pub mod check;
pub mod generate;
pub mod simple;
pub mod stats;

pub use answers::{AnswersResult, find_answers};
pub use benchmark::{BenchmarkResult, progress_bar, run_benchmark};
pub use check::{CheckResult, check_word};
pub use generate::{GeneratedSequence, run_generate};
pub use simple::run_simple;
pub use stats::load_stats;
