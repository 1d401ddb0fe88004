//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_result, print_dictionary_stats, print_puzzle,
};
pub use formatters::{render_grid, strip_answers};
