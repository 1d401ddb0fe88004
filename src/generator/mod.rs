//! Crossword generation
//!
//! Seeded backtracking search, finalization, validation and the attempt loop
//! that ties them together.

pub mod config;
mod engine;
mod error;
mod fallback;
pub mod finalize;
mod pattern;
pub mod placement;
mod rng;
pub mod validate;

pub use config::{BlackSquarePolicy, Degradation, GeneratorConfig, Minimums, Preset};
pub use engine::{Generation, Generator, Outcome};
pub use error::{AttemptError, ConfigurationError, ValidationError};
pub use fallback::fallback_puzzle;
pub use finalize::ClueSource;
pub use rng::{SeededRng, daily_seed};
pub use validate::validate;

use crate::core::GeneratedPuzzle;
use crate::dictionary::DictionaryIndex;

/// Generate a puzzle with the default configuration
///
/// # Errors
/// Returns `ConfigurationError` if the dictionary is empty or `category` matches
/// no words.
///
/// # Examples
/// ```
/// use daily_crossword::dictionary::embedded_index;
/// use daily_crossword::generator::generate;
///
/// let index = embedded_index();
/// let puzzle = generate(&index, "2024-01-01|secret", None).unwrap();
/// assert!(!puzzle.clues.is_empty());
/// ```
pub fn generate(
    index: &DictionaryIndex,
    seed: &str,
    category: Option<&str>,
) -> Result<GeneratedPuzzle, ConfigurationError> {
    Generator::new(index, GeneratorConfig::default()).generate(seed, category)
}
