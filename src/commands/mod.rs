//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_puzzle, check_puzzle_file};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
pub use stats::{DictionaryStats, dictionary_stats};
